mod model;
mod writer;

pub use model::{HttpResponse, LineEnding};
pub use writer::{render_response, write_response};
