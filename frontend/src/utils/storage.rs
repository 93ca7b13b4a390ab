use web_sys::{Storage, Window};

use crate::config;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// First non-empty token found under the configured storage keys.
///
/// Outside the browser there is no localStorage, so the chain yields nothing.
pub fn stored_bearer_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok()?;
        select_token(config::TOKEN_STORAGE_KEYS, |key| {
            storage.get_item(key).ok().flatten()
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config::TOKEN_STORAGE_KEYS;
        None
    }
}

pub fn select_token<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    keys.into_iter()
        .filter_map(|key| lookup(key))
        .find(|token| !token.trim().is_empty())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_token_keys(storage: &Storage) {
        for key in crate::config::TOKEN_STORAGE_KEYS {
            let _ = storage.remove_item(key);
        }
    }

    #[wasm_bindgen_test]
    fn jwt_key_is_found_when_it_is_the_only_one_set() {
        let storage = local_storage().unwrap();
        clear_token_keys(&storage);
        storage.set_item("jwt", "jwt-token").unwrap();

        assert_eq!(stored_bearer_token().as_deref(), Some("jwt-token"));
        clear_token_keys(&storage);
    }

    #[wasm_bindgen_test]
    fn token_key_takes_precedence_over_jwt() {
        let storage = local_storage().unwrap();
        clear_token_keys(&storage);
        storage.set_item("token", "primary").unwrap();
        storage.set_item("jwt", "secondary").unwrap();

        assert_eq!(stored_bearer_token().as_deref(), Some("primary"));
        clear_token_keys(&storage);
    }

    #[wasm_bindgen_test]
    fn empty_storage_yields_no_token() {
        let storage = local_storage().unwrap();
        clear_token_keys(&storage);

        assert_eq!(stored_bearer_token(), None);
    }
}
