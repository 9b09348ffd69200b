use reqwest::{Client, Method, Url};

use crate::error::ApiError;
use crate::page::{Filter, Params};

const FIREWALLS_PATH: &str = "/networking/firewalls";

/// A request against the firewall endpoints, composed but not sent.
///
/// Mock clients log it; a real client would hand `build` to reqwest.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub params: Params,
    pub filter: Filter,
}

impl ApiRequest {
    /// `GET /networking/firewalls`
    pub fn list_firewalls(params: &Params, filter: &Filter) -> Self {
        Self {
            method: Method::GET,
            path: FIREWALLS_PATH.to_string(),
            params: params.clone(),
            filter: filter.clone(),
        }
    }

    /// `GET /networking/firewalls/{id}/devices`
    pub fn list_firewall_devices(id: u64) -> Self {
        Self {
            method: Method::GET,
            path: format!("{}/{}/devices", FIREWALLS_PATH, id),
            params: Params::default(),
            filter: Filter::new(),
        }
    }

    /// Full URL under `api_root`, with pagination params as query pairs
    pub fn url(&self, api_root: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", api_root.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ApiError::InvalidRequest(format!("{}: {}", raw, e)))?;

        let pairs = self.params.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Value of the `X-Filter` header, if a filter is set
    pub fn x_filter(&self) -> Result<Option<String>, ApiError> {
        if self.filter.is_empty() {
            return Ok(None);
        }
        serde_json::to_string(&self.filter)
            .map(Some)
            .map_err(|e| ApiError::InvalidRequest(format!("X-Filter: {}", e)))
    }

    /// Build the reqwest request. No I/O happens here.
    pub fn build(&self, client: &Client, api_root: &str) -> Result<reqwest::Request, ApiError> {
        let mut request = client.request(self.method.clone(), self.url(api_root)?);

        if let Some(filter) = self.x_filter()? {
            request = request.header("X-Filter", filter);
        }

        request
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const API_ROOT: &str = "https://api.linode.com/v4";

    #[test]
    fn test_list_firewalls_url_with_params() {
        let params = Params {
            page: Some(2),
            page_size: Some(25),
        };
        let request = ApiRequest::list_firewalls(&params, &Filter::new());
        let url = request.url(API_ROOT).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.linode.com/v4/networking/firewalls?page=2&page_size=25"
        );
    }

    #[test]
    fn test_url_without_params_has_no_query() {
        let request = ApiRequest::list_firewalls(&Params::default(), &Filter::new());
        let url = request.url("https://api.linode.com/v4/").unwrap();

        assert_eq!(url.as_str(), "https://api.linode.com/v4/networking/firewalls");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_list_devices_path() {
        let request = ApiRequest::list_firewall_devices(42);
        assert_eq!(request.path, "/networking/firewalls/42/devices");
        assert_eq!(request.method, Method::GET);
    }

    #[test]
    fn test_invalid_api_root() {
        let request = ApiRequest::list_firewall_devices(1);
        let err = request.url("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_build_sets_x_filter_header() {
        let mut filter = Filter::new();
        filter.insert("label".to_string(), json!("edge"));

        let request = ApiRequest::list_firewalls(&Params::default(), &filter)
            .build(&Client::new(), API_ROOT)
            .unwrap();

        let header = request.headers().get("X-Filter").unwrap();
        assert_eq!(header.to_str().unwrap(), r#"{"label":"edge"}"#);
        assert_eq!(request.method(), &Method::GET);
    }

    #[test]
    fn test_build_without_filter_omits_header() {
        let request = ApiRequest::list_firewall_devices(5)
            .build(&Client::new(), API_ROOT)
            .unwrap();

        assert!(request.headers().get("X-Filter").is_none());
        assert_eq!(
            request.url().as_str(),
            "https://api.linode.com/v4/networking/firewalls/5/devices"
        );
    }
}
