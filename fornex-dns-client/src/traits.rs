use async_trait::async_trait;

use crate::error::{FornexError, Result};
use crate::types::{Domain, Entry};

/// Fornex DNS API operations.
///
/// Every method performs exactly one HTTP round trip. The API has no
/// single-item read endpoints, so [`get_domain`](Self::get_domain) and
/// [`get_entry`](Self::get_entry) are provided methods composed from the
/// list calls: they download the whole collection and scan it in memory.
/// Nothing is cached between calls.
#[async_trait]
pub trait DnsApi: Send + Sync {
    // ============ Domains ============

    /// List every domain in the account. An empty list is a valid answer.
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// Create a domain pointing at `ip`.
    ///
    /// The IP is write-only: it is not part of [`Domain`] and cannot be read back.
    async fn create_domain(&self, name: &str, ip: &str) -> Result<Domain>;

    /// Delete a domain. Deleting a domain that no longer exists surfaces the
    /// API's error response as-is.
    async fn delete_domain(&self, name: &str) -> Result<()>;

    /// Look up one domain by exact, case-sensitive name.
    ///
    /// Cost is O(n) in the number of domains in the account: each call lists
    /// all of them. Returns the first match in API order, or
    /// [`FornexError::DomainNotFound`] when the listing succeeded but had no match.
    async fn get_domain(&self, name: &str) -> Result<Domain> {
        let domains = self.list_domains().await?;
        find_domain(domains, name).ok_or_else(|| FornexError::DomainNotFound {
            domain: name.to_string(),
        })
    }

    // ============ Entries ============

    /// List the entries of one domain.
    async fn list_entries(&self, domain: &str) -> Result<Vec<Entry>>;

    /// Create an entry. Any `id` on `entry` is ignored; the returned entry carries
    /// the id assigned by the API.
    async fn create_entry(&self, domain: &str, entry: &Entry) -> Result<Entry>;

    /// Replace an entry with `entry`.
    ///
    /// Full replacement: fields left as `None` are sent absent, not merged
    /// with the stored record.
    async fn update_entry(&self, domain: &str, id: u64, entry: &Entry) -> Result<Entry>;

    /// Delete an entry. A repeated delete surfaces the API's error response as-is.
    async fn delete_entry(&self, domain: &str, id: u64) -> Result<()>;

    /// Look up one entry by id.
    ///
    /// Cost is O(n) in the number of entries of the domain: each call lists
    /// all of them. Returns [`FornexError::EntryNotFound`] when the listing
    /// succeeded but had no match.
    async fn get_entry(&self, domain: &str, id: u64) -> Result<Entry> {
        let entries = self.list_entries(domain).await?;
        find_entry(entries, id).ok_or_else(|| FornexError::EntryNotFound {
            domain: domain.to_string(),
            entry_id: id,
        })
    }
}

fn find_domain(domains: Vec<Domain>, name: &str) -> Option<Domain> {
    domains.into_iter().find(|d| d.name == name)
}

fn find_entry(entries: Vec<Entry>, id: u64) -> Option<Entry> {
    entries.into_iter().find(|e| e.id == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory listing; counts list calls to prove lookups stay one round trip.
    struct ListingStub {
        domains: Vec<Domain>,
        entries: Vec<Entry>,
        list_calls: AtomicUsize,
        fail_with: Option<FornexError>,
    }

    impl ListingStub {
        fn new(domains: Vec<Domain>, entries: Vec<Entry>) -> Self {
            Self {
                domains,
                entries,
                list_calls: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        fn failing(err: FornexError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::new(Vec::new(), Vec::new())
            }
        }
    }

    #[async_trait]
    impl DnsApi for ListingStub {
        async fn list_domains(&self) -> Result<Vec<Domain>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(self.domains.clone()),
            }
        }

        async fn create_domain(&self, _name: &str, _ip: &str) -> Result<Domain> {
            unreachable!("not used by lookup tests")
        }

        async fn delete_domain(&self, _name: &str) -> Result<()> {
            unreachable!("not used by lookup tests")
        }

        async fn list_entries(&self, _domain: &str) -> Result<Vec<Entry>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(self.entries.clone()),
            }
        }

        async fn create_entry(&self, _domain: &str, _entry: &Entry) -> Result<Entry> {
            unreachable!("not used by lookup tests")
        }

        async fn update_entry(&self, _domain: &str, _id: u64, _entry: &Entry) -> Result<Entry> {
            unreachable!("not used by lookup tests")
        }

        async fn delete_entry(&self, _domain: &str, _id: u64) -> Result<()> {
            unreachable!("not used by lookup tests")
        }
    }

    fn domain(name: &str, tag: &str) -> Domain {
        Domain {
            name: name.to_string(),
            created: None,
            updated: None,
            entry_set: Vec::new(),
            tags: vec![tag.to_string()],
        }
    }

    fn entry(id: u64, host: &str) -> Entry {
        let mut e = Entry::new(host, "A", "192.0.2.1");
        e.id = Some(id);
        e
    }

    #[tokio::test]
    async fn get_domain_exact_match() {
        let stub = ListingStub::new(
            vec![domain("a.com", "1"), domain("example.com", "2")],
            Vec::new(),
        );
        let found = stub.get_domain("example.com").await.unwrap();
        assert_eq!(found.tags, vec!["2".to_string()]);
        assert_eq!(stub.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_domain_is_case_sensitive() {
        let stub = ListingStub::new(vec![domain("Example.com", "1")], Vec::new());
        let res = stub.get_domain("example.com").await;
        assert!(
            matches!(&res, Err(FornexError::DomainNotFound { domain }) if domain == "example.com"),
            "unexpected result: {res:?}"
        );
    }

    #[tokio::test]
    async fn get_domain_first_duplicate_wins() {
        let stub = ListingStub::new(
            vec![domain("dup.com", "first"), domain("dup.com", "second")],
            Vec::new(),
        );
        let found = stub.get_domain("dup.com").await.unwrap();
        assert_eq!(found.tags, vec!["first".to_string()]);
    }

    #[tokio::test]
    async fn get_domain_on_empty_account() {
        let stub = ListingStub::new(Vec::new(), Vec::new());
        let res = stub.get_domain("example.com").await;
        assert!(res.as_ref().is_err_and(FornexError::is_not_found));
    }

    #[tokio::test]
    async fn get_domain_propagates_list_failure() {
        let stub = ListingStub::failing(FornexError::Api {
            status: 500,
            body: "boom".into(),
        });
        let res = stub.get_domain("example.com").await;
        assert_eq!(res.as_ref().err().and_then(FornexError::status), Some(500));
    }

    #[tokio::test]
    async fn get_entry_by_id() {
        let stub = ListingStub::new(Vec::new(), vec![entry(1, "a"), entry(2, "b")]);
        let found = stub.get_entry("example.com", 2).await.unwrap();
        assert_eq!(found.host, "b");
        assert_eq!(stub.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_entry_missing() {
        let stub = ListingStub::new(Vec::new(), vec![entry(1, "a")]);
        let res = stub.get_entry("example.com", 9).await;
        assert!(
            matches!(
                &res,
                Err(FornexError::EntryNotFound { domain, entry_id: 9 }) if domain == "example.com"
            ),
            "unexpected result: {res:?}"
        );
    }

    #[tokio::test]
    async fn get_entry_ignores_entries_without_id() {
        let stub = ListingStub::new(Vec::new(), vec![Entry::new("x", "A", "192.0.2.1")]);
        assert!(stub.get_entry("example.com", 0).await.is_err());
    }

    #[tokio::test]
    async fn get_entry_propagates_network_failure() {
        let stub = ListingStub::failing(FornexError::Timeout {
            detail: "elapsed".into(),
        });
        let res = stub.get_entry("example.com", 1).await;
        assert!(res.as_ref().is_err_and(FornexError::is_network));
    }
}
