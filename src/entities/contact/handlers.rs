use super::model::{ADS_COOKIE, ContactForm, ContactReply};
use crate::core::error::ApiResult;
use crate::core::extractors::{cookie_value, header_value};
use crate::core::validation::ValidatedForm;
use axum::Json;
use axum::http::{HeaderMap, header};

/// Read the out-of-band values of a contact request
///
/// The form itself is only validated, never echoed.
pub fn contact_reply(headers: &HeaderMap) -> ApiResult<ContactReply> {
    Ok(ContactReply {
        user_agent: header_value(headers, header::USER_AGENT.as_str())?,
        ads: cookie_value(headers, ADS_COOKIE),
    })
}

/// `POST /contact`
pub async fn contact(
    headers: HeaderMap,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> ApiResult<Json<ContactReply>> {
    let reply = contact_reply(&headers)?;
    tracing::debug!(email = %form.email, has_ads = reply.ads.is_some(), "contact received");
    Ok(Json(reply))
}
