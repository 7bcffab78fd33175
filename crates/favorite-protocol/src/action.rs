//! Action URLs and Trigger Fields

use url::Url;

use crate::error::FavoriteError;

/// Attributes carrying request fields on non-form triggers
pub const PARAM_ATTRIBUTE_PREFIX: &str = "data-param-";

/// Resolve a trigger's action against the document base URI
pub fn resolve_action(base: &str, action: &str) -> Result<Url, FavoriteError> {
    let action = action.trim();
    if action.is_empty() {
        return Err(FavoriteError::InvalidAction("empty action".to_string()));
    }
    let base = Url::parse(base).map_err(|e| FavoriteError::InvalidAction(format!("base {}: {}", base, e)))?;
    let url = base
        .join(action)
        .map_err(|e| FavoriteError::InvalidAction(format!("{}: {}", action, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FavoriteError::InvalidAction(format!("unsupported scheme {}", other))),
    }
}

/// Choose the action url after a toggle.
///
/// A url sent by the server wins; otherwise the trigger's own add/remove
/// urls are used, remove when the resource is now a favorite.
pub fn next_action<'a>(
    is_favorite: bool,
    from_response: Option<&'a str>,
    add_url: Option<&'a str>,
    remove_url: Option<&'a str>,
) -> Option<&'a str> {
    from_response
        .or(if is_favorite { remove_url } else { add_url })
        .filter(|url| !url.trim().is_empty())
}

/// Collect `data-param-<name>` attributes as request fields, in attribute order
pub fn params_from_attributes<I>(attributes: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    attributes
        .into_iter()
        .filter_map(|(name, value)| {
            let field = name.strip_prefix(PARAM_ATTRIBUTE_PREFIX)?;
            if field.is_empty() {
                return None;
            }
            Some((field.to_string(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://board.example/boards/3/";

    #[test]
    fn test_resolve_relative_action() {
        let url = resolve_action(BASE, "/favorites/add/").unwrap();
        assert_eq!(url.as_str(), "https://board.example/favorites/add/");

        let url = resolve_action(BASE, "favorite/").unwrap();
        assert_eq!(url.as_str(), "https://board.example/boards/3/favorite/");
    }

    #[test]
    fn test_resolve_absolute_action() {
        let url = resolve_action(BASE, "https://api.example/fav").unwrap();
        assert_eq!(url.as_str(), "https://api.example/fav");
    }

    #[test]
    fn test_resolve_rejects_empty_and_script() {
        assert!(matches!(resolve_action(BASE, "  "), Err(FavoriteError::InvalidAction(_))));
        assert!(matches!(
            resolve_action(BASE, "javascript:alert(1)"),
            Err(FavoriteError::InvalidAction(_))
        ));
        assert!(matches!(
            resolve_action("not a url", "/x"),
            Err(FavoriteError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_next_action_prefers_response() {
        assert_eq!(
            next_action(true, Some("/srv/remove/"), Some("/add/"), Some("/remove/")),
            Some("/srv/remove/")
        );
    }

    #[test]
    fn test_next_action_from_data_urls() {
        assert_eq!(next_action(true, None, Some("/add/"), Some("/remove/")), Some("/remove/"));
        assert_eq!(next_action(false, None, Some("/add/"), Some("/remove/")), Some("/add/"));
        assert_eq!(next_action(false, None, None, Some("/remove/")), None);
        assert_eq!(next_action(true, None, Some("/add/"), Some("")), None);
    }

    #[test]
    fn test_params_from_attributes() {
        let attrs = vec![
            ("class".to_string(), "favorite-form".to_string()),
            ("data-param-board_id".to_string(), "7".to_string()),
            ("data-action".to_string(), "/favorites/add/".to_string()),
            ("data-param-csrfmiddlewaretoken".to_string(), "tok".to_string()),
            ("data-param-".to_string(), "ignored".to_string()),
        ];
        assert_eq!(
            params_from_attributes(attrs),
            vec![
                ("board_id".to_string(), "7".to_string()),
                ("csrfmiddlewaretoken".to_string(), "tok".to_string()),
            ]
        );
    }
}
