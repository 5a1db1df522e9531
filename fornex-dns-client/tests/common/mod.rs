//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use fornex_dns_client::{ClientConfig, DnsApi, Entry, FornexClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client pointed at a mock server.
pub fn mock_client(server: &MockServer) -> FornexClient {
    FornexClient::new(TEST_API_KEY, Some(server.uri().as_str())).expect("mock client")
}

/// Client pointed at a mock server with a short timeout.
pub fn mock_client_with_timeout(server: &MockServer, timeout: Duration) -> FornexClient {
    let config = ClientConfig::new(TEST_API_KEY)
        .with_base_url(server.uri())
        .with_timeout(timeout);
    FornexClient::from_config(config).expect("mock client")
}

/// 生成唯一的测试记录名称
pub fn generate_test_host() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装真实 API 客户端和测试域名
pub struct LiveContext {
    pub client: FornexClient,
    pub domain: String,
}

impl LiveContext {
    /// 从 `FORNEX_API_KEY` / `TEST_DOMAIN`（可选 `FORNEX_BASE_URL`）创建
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("FORNEX_API_KEY").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let base_url = env::var("FORNEX_BASE_URL").ok();

        let client = FornexClient::new(api_key, base_url.as_deref()).ok()?;
        Some(Self { client, domain })
    }

    /// 创建 TXT 测试记录
    pub async fn create_test_entry(&self) -> Option<Entry> {
        let entry = Entry::new(generate_test_host(), "TXT", "integration-test");
        self.client.create_entry(&self.domain, &entry).await.ok()
    }

    /// 清理测试记录
    pub async fn cleanup_entry(&self, id: u64) {
        let _ = self.client.delete_entry(&self.domain, id).await;
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_entries(&self) {
        if let Ok(entries) = self.client.list_entries(&self.domain).await {
            for entry in entries {
                if let (true, Some(id)) = (entry.host.starts_with("_test-"), entry.id) {
                    let _ = self.client.delete_entry(&self.domain, id).await;
                }
            }
        }
    }
}
