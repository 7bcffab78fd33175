//! Favorite Triggers
//!
//! A trigger is either a `<form>` carrying the favorite marker, or any other
//! marked element that holds its action and fields in data attributes:
//!
//! ```html
//! <button class="favorite-form" data-action="/favorites/add/"
//!         data-add-url="/favorites/add/" data-remove-url="/favorites/remove/"
//!         data-param-board_id="7">...</button>
//! ```

use favorite_protocol::{params_from_attributes, resolve_action, FavoriteError};
use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlFormElement};

use crate::dom;

pub const ACTION_ATTRIBUTE: &str = "data-action";
pub const ADD_URL_ATTRIBUTE: &str = "data-add-url";
pub const REMOVE_URL_ATTRIBUTE: &str = "data-remove-url";

#[derive(Clone, Debug)]
pub enum Trigger {
    Form(HtmlFormElement),
    Element(Element),
}

impl Trigger {
    pub fn new(el: Element) -> Self {
        match el.dyn_into::<HtmlFormElement>() {
            Ok(form) => Trigger::Form(form),
            Err(el) => Trigger::Element(el),
        }
    }

    /// Trigger for a `submit` event, only favorite forms qualify
    pub fn from_submit(target: &EventTarget, selector: &str) -> Option<Self> {
        match Self::new(dom::closest_from_target(target, selector)?) {
            form @ Trigger::Form(_) => Some(form),
            Trigger::Element(_) => None,
        }
    }

    /// Trigger for a `click` event. Forms are left to the submit listener.
    pub fn from_click(target: &EventTarget, selector: &str) -> Option<Self> {
        match Self::new(dom::closest_from_target(target, selector)?) {
            Trigger::Form(_) => None,
            el @ Trigger::Element(_) => Some(el),
        }
    }

    pub fn element(&self) -> &Element {
        match self {
            Trigger::Form(form) => form.unchecked_ref::<Element>(),
            Trigger::Element(el) => el,
        }
    }

    fn raw_action(&self) -> Option<String> {
        match self {
            // The property is already resolved by the browser
            Trigger::Form(form) => Some(form.action()),
            Trigger::Element(el) => el.get_attribute(ACTION_ATTRIBUTE),
        }
    }

    /// Absolute url to POST to
    pub fn action_url(&self) -> Result<Url, FavoriteError> {
        let action = self
            .raw_action()
            .ok_or_else(|| FavoriteError::InvalidAction(format!("missing {}", ACTION_ATTRIBUTE)))?;
        let base = dom::base_uri()
            .ok_or_else(|| FavoriteError::InvalidAction("document has no base uri".to_string()))?;
        resolve_action(&base, &action)
    }

    pub fn set_action(&self, url: &str) -> Result<(), FavoriteError> {
        let result = match self {
            Trigger::Form(form) => form.set_attribute("action", url),
            Trigger::Element(el) => el.set_attribute(ACTION_ATTRIBUTE, url),
        };
        result.map_err(|e| FavoriteError::Dom(format!("set action: {:?}", e)))
    }

    /// Request fields in submission order
    pub fn fields(&self) -> Result<Vec<(String, String)>, FavoriteError> {
        match self {
            Trigger::Form(form) => {
                dom::form_fields(form).map_err(|e| FavoriteError::Dom(format!("serialize form: {:?}", e)))
            }
            Trigger::Element(el) => Ok(params_from_attributes(dom::attributes(el))),
        }
    }

    pub fn add_url(&self) -> Option<String> {
        self.element().get_attribute(ADD_URL_ATTRIBUTE)
    }

    pub fn remove_url(&self) -> Option<String> {
        self.element().get_attribute(REMOVE_URL_ATTRIBUTE)
    }
}
