use http_client::Request;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Add the headers every API request carries
pub fn add_common_headers(request: &mut Request, user_agent: &str) {
    let _ = request.insert_header("User-Agent", user_agent);
    let _ = request.insert_header("Accept", JSON_CONTENT_TYPE);
}

/// Add headers for requests that carry a JSON body
pub fn add_json_body_headers(request: &mut Request, user_agent: &str) {
    add_common_headers(request, user_agent);
    let _ = request.insert_header("Content-Type", JSON_CONTENT_TYPE);
}
