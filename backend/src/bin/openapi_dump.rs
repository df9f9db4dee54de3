//! Print the OpenAPI document as JSON.

use utoipa::OpenApi;
use yadoya_backend::doc::ApiDoc;

fn main() {
    println!("{}", ApiDoc::openapi().to_json().unwrap());
}
