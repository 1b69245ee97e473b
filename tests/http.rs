use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct CampaignRow {
    name: String,
    spend: f64,
    conversions: u32,
    conv_rate: f64,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ChartPoint {
    label: String,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct ChartSeries {
    metric: String,
    unit: String,
    points: Vec<ChartPoint>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/report")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_ads_audit"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_index_serves_full_dashboard() {
    let server = shared_server().await;
    let client = Client::new();

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Google Ads Performance Audit Report"));
    assert!(body.contains("Reporting Period: June 28 - July 27, 2025"));
    for tab in ["overview", "campaigns", "recommendations", "summary"] {
        assert!(body.contains(&format!("data-tab=\"{tab}\"")), "missing tab {tab}");
    }
    assert_eq!(body.matches("<tr class=\"campaign-row\">").count(), 8);
    assert!(body.contains("$922.40"));
}

#[tokio::test]
async fn http_campaigns_carry_status_labels() {
    let server = shared_server().await;
    let client = Client::new();

    let rows: Vec<CampaignRow> = client
        .get(format!("{}/api/campaigns", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(rows.len(), 8);

    let pmax = rows.iter().find(|row| row.name == "P.Max").unwrap();
    assert_eq!(pmax.status, "Critical");
    assert_eq!(pmax.conversions, 0);
    assert!((pmax.spend - 922.40).abs() < 0.005);

    let rfas = rows.iter().find(|row| row.name == "Search-RFAs").unwrap();
    assert_eq!(rfas.status, "Excellent");
    assert!((rfas.conv_rate - 16.07).abs() < 0.005);
}

#[tokio::test]
async fn http_chart_series_for_both_metrics() {
    let server = shared_server().await;
    let client = Client::new();

    let spend: ChartSeries = client
        .get(format!("{}/api/chart/spend", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(spend.metric, "spend");
    assert_eq!(spend.unit, "currency");
    assert_eq!(spend.points.len(), 8);
    assert_eq!(spend.points[0].label, "Search-Brand");
    assert!((spend.points[0].value - 1484.46).abs() < 0.005);

    let conv: ChartSeries = client
        .get(format!("{}/api/chart/conv_rate", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(conv.metric, "conv_rate");
    assert_eq!(conv.unit, "percent");
    assert_eq!(conv.points.len(), 8);
}

#[tokio::test]
async fn http_unknown_chart_metric_is_bad_request() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/chart/clicks", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let message = response.text().await.unwrap();
    assert!(message.contains("spend"));
}

#[tokio::test]
async fn http_report_includes_summary_figures() {
    let server = shared_server().await;
    let client = Client::new();

    let report: serde_json::Value = client
        .get(format!("{}/api/report", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(report["campaigns"].as_array().unwrap().len(), 8);
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 5);
    assert_eq!(report["leading"].as_array().unwrap().len(), 3);
    assert_eq!(report["lagging"].as_array().unwrap().len(), 3);

    // Delivered as-is: the summary quotes a different spend than the table sums to.
    assert_eq!(report["summary"]["total_spend"], 5558.84);
    assert_eq!(report["totals"]["spend"], 5441.82);
    assert_eq!(report["recommendations"][0]["priority"], "high");
}
