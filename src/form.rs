use crate::constants::{FORM_ID, FORM_STATUS_ID};
use folio_core::form::{assemble_target, outcome_for_status, FormPolicy, RelayError, RelayRequest, Submission};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Attach the configured submission policy to the contact form. Only one
/// policy is ever attached to a given form.
pub fn wire_contact_form(document: &web::Document, policy: FormPolicy) {
    let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let status = document.get_element_by_id(FORM_STATUS_ID);

    let form_for_submit = form.clone();
    let on_submit = Closure::wrap(Box::new(move |ev: web::Event| match &policy {
        FormPolicy::Redirect {
            endpoint,
            user,
            domain,
        } => {
            // Native submission continues to the rewritten action.
            form_for_submit.set_action(&assemble_target(endpoint, user, domain));
        }
        FormPolicy::Relay {
            service_id,
            template_id,
            public_key,
            endpoint,
        } => {
            ev.prevent_default();
            let mut submission = Submission::begin();
            set_status(&status, submission.status().message());

            let body = RelayRequest::new(service_id, template_id, public_key, form_fields(&form_for_submit))
                .to_json();
            let endpoint = endpoint.clone();
            let form = form_for_submit.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = match body {
                    Ok(body) => send(&endpoint, body).await,
                    Err(e) => Err(e),
                };
                let resolution = submission.resolve(outcome);
                set_status(&status, resolution.status.message());
                if resolution.clear_fields {
                    form.reset();
                }
            });
        }
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}

fn set_status(status: &Option<web::Element>, text: &str) {
    if let Some(el) = status {
        el.set_text_content(Some(text));
    }
}

/// Named text fields of the form, in document order. File inputs are skipped.
fn form_fields(form: &web::HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(iter)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    iter.filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

fn transport(e: JsValue) -> RelayError {
    RelayError::Transport(format!("{:?}", e))
}

async fn send(endpoint: &str, body: String) -> Result<(), RelayError> {
    let window = web::window().ok_or_else(|| RelayError::Transport("no window".into()))?;
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(endpoint, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: web::Response = response.dyn_into().map_err(transport)?;
    log::info!("[form] relay answered {}", response.status());
    outcome_for_status(response.status())
}
