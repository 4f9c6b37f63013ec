// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! HTTP implementation of the catalog source.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    catalog::{
        CatalogSource,
        wire::{AudioConfigData, CollectionDetailData, CollectionsData, Envelope},
    },
    error::CatalogError,
    model::{CollectionDetail, CollectionPage},
};

/// Catalog client backed by a blocking `ureq` agent.
pub struct HttpCatalog {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5).min(timeout))
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();

        Self {
            agent,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let mut request = self.agent.get(&url);
        for (key, value) in query {
            request = request.query(key, value);
        }

        let response = request.call()?;
        let envelope: Envelope<T> = response
            .into_json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        envelope.into_data()
    }
}

impl From<ureq::Error> for CatalogError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(403, _) => CatalogError::Forbidden,
            ureq::Error::Status(404, _) => CatalogError::NotFound,
            ureq::Error::Status(code, _) => CatalogError::Status(code),
            ureq::Error::Transport(transport) => CatalogError::Http(transport.to_string()),
        }
    }
}

impl CatalogSource for HttpCatalog {
    fn list_collections(
        &self,
        page: usize,
        per_page: usize,
        search: Option<&str>,
    ) -> Result<CollectionPage, CatalogError> {
        let mut query = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }

        let data: CollectionsData = self.get_json("/api/audio_collections", &query)?;
        Ok(data.into())
    }

    fn get_collection(&self, id: i64) -> Result<CollectionDetail, CatalogError> {
        let data: CollectionDetailData =
            self.get_json(&format!("/api/audio_collection/{}", id), &[])?;
        Ok(data.into())
    }

    fn audio_per_page(&self) -> Result<usize, CatalogError> {
        let data: AudioConfigData = self.get_json("/api/audio_config", &[])?;
        Ok(data.audio_per_page())
    }
}
