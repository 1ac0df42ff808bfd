//! OpenAPI documentation for the forms API.
//!
//! Served as JSON at `/openapi.json` and rendered with Scalar at `/docs`. Paths are documented
//! relative to the `/api` prefix, which is declared as the server URL.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    servers(
        (url = "/api", description = "Forms API")
    ),
    paths(
        api::handlers::forms::list_forms,
        api::handlers::forms::get_form,
        api::handlers::forms::get_form_by_link,
        api::handlers::forms::save_form,
        api::handlers::forms::replace_form,
        api::handlers::forms::delete_form,
        api::handlers::forms::get_form_analytics,
        api::handlers::responses::add_responses,
        api::handlers::responses::list_responses,
        api::handlers::users::list_users,
        api::handlers::users::create_user,
    ),
    components(
        schemas(
            api::models::forms::FormSave,
            api::models::forms::QuestionSave,
            api::models::forms::FormResponse,
            api::models::forms::QuestionResponse,
            api::models::responses::ResponseCreate,
            api::models::responses::SubmittedResponse,
            api::models::users::UserCreate,
            api::models::users::UserResponse,
            api::models::analytics::Analytics,
        )
    ),
    tags(
        (name = "forms", description = "Create, publish and manage forms.

A form holds an ordered list of questions and a shareable link. Saving a form always replaces its full \
question list; question order follows the order of the submitted array."),
        (name = "responses", description = "Submit and read answers to a form. Responses are kept when their form is deleted."),
        (name = "users", description = "Manage users. Only the configured browser origins may call these endpoints."),
    ),
    info(
        title = "formctl",
        version = "1.0.0",
        description = "Form builder backend.

## Errors

Most errors return a plain-text body with an appropriate status code. A shareable link collision returns \
`409 Conflict` with a JSON body:

```json
{
  \"message\": \"A form with this shareable link already exists\",
  \"resource\": \"form\"
}
```",
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_declares_api_server() {
        let doc = ApiDoc::openapi();
        let servers = doc.servers.expect("servers should be set");
        assert_eq!(servers[0].url, "/api");
    }

    #[test]
    fn test_api_doc_tags_every_operation() {
        let doc = ApiDoc::openapi();
        let known = ["forms", "responses", "users"];

        for (path, item) in doc.paths.paths.iter() {
            for op in [&item.get, &item.post, &item.put, &item.delete].into_iter().flatten() {
                let tags = op.tags.as_ref().expect("operation should be tagged");
                assert!(tags.iter().all(|t| known.contains(&t.as_str())), "unexpected tag on {path}");
            }
        }
    }
}
