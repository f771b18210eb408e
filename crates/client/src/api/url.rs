//! API endpoint path construction.

use kintone_miniapp_domain::GuestSpaceId;

/// Parameters for [`build_path`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildPathParams<'a> {
    pub endpoint_name: &'a str,
    pub guest_space_id: Option<&'a GuestSpaceId>,
    /// Target the pre-live (preview) app settings API.
    pub preview: bool,
}

/// Build an API path, scoped to a guest space when an identifier is given:
/// `/k/v1/{endpoint}.json` or `/k/guest/{id}/v1/{endpoint}.json`.
pub fn build_path(params: BuildPathParams<'_>) -> String {
    let prefix = match params.guest_space_id {
        Some(id) => format!("/k/guest/{id}"),
        None => "/k".to_string(),
    };
    let version = if params.preview { "v1/preview" } else { "v1" };
    format!("{prefix}/{version}/{}.json", params.endpoint_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_plain_paths() {
        let path = build_path(BuildPathParams { endpoint_name: "record", ..Default::default() });
        assert_eq!(path, "/k/v1/record.json");
    }

    #[test]
    fn builds_guest_space_paths() {
        let guest_space_id = GuestSpaceId::from(1);
        let path = build_path(BuildPathParams {
            endpoint_name: "file",
            guest_space_id: Some(&guest_space_id),
            preview: false,
        });
        assert_eq!(path, "/k/guest/1/v1/file.json");
    }

    #[test]
    fn builds_preview_paths() {
        let path = build_path(BuildPathParams {
            endpoint_name: "app/form/fields",
            guest_space_id: None,
            preview: true,
        });
        assert_eq!(path, "/k/v1/preview/app/form/fields.json");
    }
}
