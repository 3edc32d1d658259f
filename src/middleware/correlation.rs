use reqwest::Method;
use serde_json::Value;

use crate::client::RequestBody;
use crate::utils::append_query_param;

pub const REQUEST_ID_FIELD: &str = "requestID";

/// Stamps the correlation id onto a request: into the body for POST/PUT, into
/// the query string for DELETE. GET requests go out untouched.
pub fn attach_request_id(
    method: &Method,
    path: &str,
    body: RequestBody,
    request_id: &str,
) -> (String, RequestBody) {
    if *method == Method::POST || *method == Method::PUT {
        let body = match body {
            RequestBody::Json(Value::Object(mut map)) => {
                map.insert(REQUEST_ID_FIELD.into(), Value::String(request_id.into()));
                RequestBody::Json(Value::Object(map))
            }
            RequestBody::Multipart(mut fields) => {
                fields.push((REQUEST_ID_FIELD.into(), request_id.into()));
                RequestBody::Multipart(fields)
            }
            // non-object JSON is sent as-is
            other => other,
        };
        (path.to_string(), body)
    } else if *method == Method::DELETE {
        (append_query_param(path, REQUEST_ID_FIELD, request_id), body)
    } else {
        (path.to_string(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_json_gets_field_in_body() {
        let (path, body) = attach_request_id(
            &Method::POST,
            "/kycmanagement/approve",
            RequestBody::Json(json!({"kyc_id": "7"})),
            "rid_2006",
        );
        assert_eq!(path, "/kycmanagement/approve");
        assert_eq!(
            body,
            RequestBody::Json(json!({"kyc_id": "7", "requestID": "rid_2006"}))
        );
    }

    #[test]
    fn put_multipart_gets_field_appended() {
        let (_, body) = attach_request_id(
            &Method::PUT,
            "/x",
            RequestBody::Multipart(vec![("a".into(), "1".into())]),
            "rid_2006",
        );
        assert_eq!(
            body,
            RequestBody::Multipart(vec![
                ("a".into(), "1".into()),
                ("requestID".into(), "rid_2006".into()),
            ])
        );
    }

    #[test]
    fn non_object_json_is_left_alone() {
        let (_, body) =
            attach_request_id(&Method::POST, "/x", RequestBody::Json(json!([1, 2])), "rid");
        assert_eq!(body, RequestBody::Json(json!([1, 2])));
    }

    #[test]
    fn delete_gets_field_in_query() {
        let (path, body) = attach_request_id(
            &Method::DELETE,
            "/usermanagement/delete/12",
            RequestBody::Empty,
            "rid_2006",
        );
        assert_eq!(path, "/usermanagement/delete/12?requestID=rid_2006");
        assert_eq!(body, RequestBody::Empty);
    }

    #[test]
    fn get_is_untouched() {
        let (path, body) =
            attach_request_id(&Method::GET, "/usermanagement/list?page=1", RequestBody::Empty, "rid");
        assert_eq!(path, "/usermanagement/list?page=1");
        assert_eq!(body, RequestBody::Empty);
    }
}
