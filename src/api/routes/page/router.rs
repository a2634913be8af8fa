//! Router for the chat page

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use super::public::{PageForm, PageView};
use super::template::Template;
use crate::api::public::ApiError;
use crate::api::state::{SharedState, next_turn};

const SESSION_COOKIE: &str = "session_id";

/// Get the caller's session ID from their cookie or start a new
/// session with a fresh cookie.
fn session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) {
        return (jar, id);
    }

    let id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .build();
    (jar.add(cookie), id)
}

fn render(state: &SharedState, view: &PageView) -> Result<Html<String>, ApiError> {
    let shared_state = state.read().expect("Unable to read share state");
    let html = shared_state
        .templates
        .render(&Template::Page.to_string(), view)?;
    Ok(Html(html))
}

/// Show the page without asking anything
async fn index(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), ApiError> {
    let (jar, _) = session(jar);
    let view = {
        let shared_state = state.read().expect("Unable to read share state");
        PageView::new(&shared_state.config, None, None)
    };

    Ok((jar, render(&state, &view)?))
}

/// Ask the submitted question and show the answer or the error
async fn ask(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<PageForm>,
) -> Result<(CookieJar, Html<String>), ApiError> {
    let (jar, session_id) = session(jar);
    let (mut view, model) = {
        let shared_state = state.read().expect("Unable to read share state");
        let model = form.model.unwrap_or(shared_state.config.default_model);
        let view = PageView::new(&shared_state.config, form.system_prompt, Some(model));
        (view, model)
    };
    view.question = form.question;

    // Without a key the page only shows the configuration error and
    // nothing is sent
    if view.config_error.is_none() && !view.question.is_empty() {
        match next_turn(&state, &session_id, &view.question, &view.system_prompt, model).await {
            Ok(reply) => view.response = Some(reply.content().to_string()),
            Err(e) => view.error = Some(e.to_string()),
        }
    }

    Ok((jar, render(&state, &view)?))
}

/// Create the page router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(index).post(ask))
}
