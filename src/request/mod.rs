mod model;
mod reader;

pub use model::{truncate_for_display, RequestInfo, DEFAULT_METHOD, ELLIPSIS};
pub use reader::{
    lenient_content_length, parse_content_length, read_available, read_request, CONTENT_LENGTH,
    QUERY_STRING, REQUEST_METHOD,
};
