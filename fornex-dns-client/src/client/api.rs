//! Fornex `DnsApi` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DnsApi;
use crate::types::{CreateDomainRequest, Domain, Entry};

use super::{FornexClient, domain_path, domains_path, entries_path, entry_path};

#[async_trait]
impl DnsApi for FornexClient {
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        self.get(&domains_path()).await
    }

    async fn create_domain(&self, name: &str, ip: &str) -> Result<Domain> {
        let body = CreateDomainRequest {
            name: name.to_string(),
            ip: ip.to_string(),
        };
        self.post(&domains_path(), &body).await
    }

    async fn delete_domain(&self, name: &str) -> Result<()> {
        self.delete(&domain_path(name)).await
    }

    async fn list_entries(&self, domain: &str) -> Result<Vec<Entry>> {
        self.get(&entries_path(domain)).await
    }

    async fn create_entry(&self, domain: &str, entry: &Entry) -> Result<Entry> {
        // id 由 API 分配，请求体里不带
        let body = Entry {
            id: None,
            ..entry.clone()
        };
        self.post(&entries_path(domain), &body).await
    }

    async fn update_entry(&self, domain: &str, id: u64, entry: &Entry) -> Result<Entry> {
        self.put(&entry_path(domain, id), entry).await
    }

    async fn delete_entry(&self, domain: &str, id: u64) -> Result<()> {
        self.delete(&entry_path(domain, id)).await
    }
}
