//! Inspection service: runs one operation per pipeline item.
//!
//! The service owns the scan poll loop: a full scan issues one
//! `analyze` request per tick and sleeps a fixed interval between
//! ticks until the assessment reaches a terminal status. There is no
//! retry, no backoff, and no attempt cap; cancellation belongs to the
//! caller (dropping the future or Ctrl-C).

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ssllabs::models::AnalyzeReport;
use crate::domain::errors::{SslProbeError, SslProbeResult};
use crate::domain::models::{PipelineItem, ScanStatus};
use crate::domain::ports::{QuickCheckApi, ScanApi};

/// One certificate-inspection operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectionOp {
    /// Quick check via ssl-checker.io.
    QuickCheck {
        /// The target domain.
        target: String,
    },
    /// Full SSL Labs scan, polled to completion.
    FullScan {
        /// The target domain.
        target: String,
    },
    /// Detail retrieval for one endpoint of a scanned host.
    EndpointAnalysis {
        /// The target domain.
        target: String,
        /// The endpoint IP address.
        endpoint: String,
    },
}

/// Coordinates the inspection APIs and feeds results into pipeline items.
pub struct InspectionService {
    quick_check: Arc<dyn QuickCheckApi>,
    scan: Option<Arc<dyn ScanApi>>,
    poll_interval: Duration,
    max_age_hours: u32,
}

impl InspectionService {
    /// Create a service.
    ///
    /// `scan` is `None` when no SSL Labs credentials are configured;
    /// scan operations then fail with [`SslProbeError::MissingCredentials`].
    pub fn new(
        quick_check: Arc<dyn QuickCheckApi>,
        scan: Option<Arc<dyn ScanApi>>,
        poll_interval: Duration,
        max_age_hours: u32,
    ) -> Self {
        Self {
            quick_check,
            scan,
            poll_interval,
            max_age_hours,
        }
    }

    fn scan_api(&self) -> SslProbeResult<&Arc<dyn ScanApi>> {
        self.scan.as_ref().ok_or(SslProbeError::MissingCredentials)
    }

    /// Run a quick check and write the report into `field` of `item`.
    pub async fn quick_check(
        &self,
        item: &mut PipelineItem,
        target: &str,
        field: &str,
    ) -> SslProbeResult<()> {
        let report = self.quick_check.check(target).await?;
        item.set_field(field, serde_json::to_value(&report)?);
        Ok(())
    }

    /// Run a full scan to completion and write the terminal report
    /// into `field` of `item`.
    ///
    /// Polls `analyze` at the configured fixed interval until the
    /// status is terminal. Both terminal reports are written, ERROR
    /// included, so the item always carries the API's final document;
    /// callers inspect the returned report's status to decide how to
    /// surface a failed assessment.
    pub async fn full_scan(
        &self,
        item: &mut PipelineItem,
        target: &str,
        field: &str,
    ) -> SslProbeResult<AnalyzeReport> {
        let report = self.poll_scan(target).await?;
        item.set_field(field, serde_json::to_value(&report)?);
        Ok(report)
    }

    /// Drive the poll loop and return the terminal report.
    pub async fn poll_scan(&self, target: &str) -> SslProbeResult<AnalyzeReport> {
        let scan = self.scan_api()?;

        let mut report = scan.analyze(target, self.max_age_hours).await?;
        let mut polls = 1u64;

        while !report.status.is_terminal() {
            tracing::info!(
                host = %target,
                status = %report.status,
                polls,
                "scan in progress, sleeping {}s",
                self.poll_interval.as_secs_f64()
            );
            tokio::time::sleep(self.poll_interval).await;
            report = scan.analyze(target, self.max_age_hours).await?;
            polls += 1;
        }

        if report.status == ScanStatus::Error {
            let message = report.status_message.as_deref().unwrap_or("no status message");
            tracing::warn!(host = %target, polls, message, "scan reported ERROR");
        } else {
            tracing::info!(host = %target, polls, "scan ready");
        }
        Ok(report)
    }

    /// Retrieve endpoint detail and write it into the literal key
    /// `{field}.analyze` of `item`.
    ///
    /// The dotted name is one flat key, not a nested object; consumers
    /// of the original adapter depend on that shape.
    pub async fn endpoint_analysis(
        &self,
        item: &mut PipelineItem,
        target: &str,
        endpoint: &str,
        field: &str,
    ) -> SslProbeResult<()> {
        let scan = self.scan_api()?;
        let report = scan.endpoint_data(target, endpoint).await?;
        item.set_field(&format!("{field}.analyze"), serde_json::to_value(&report)?);
        Ok(())
    }

    /// Run `op` over `items` sequentially, one API interaction per item.
    ///
    /// Each input item yields exactly one output item, annotated under
    /// `field`. Processing stops at the first failing item.
    pub async fn run(
        &self,
        op: &InspectionOp,
        mut items: Vec<PipelineItem>,
        field: &str,
    ) -> SslProbeResult<Vec<PipelineItem>> {
        for item in &mut items {
            match op {
                InspectionOp::QuickCheck { target } => {
                    self.quick_check(item, target, field).await?;
                }
                InspectionOp::FullScan { target } => {
                    self.full_scan(item, target, field).await?;
                }
                InspectionOp::EndpointAnalysis { target, endpoint } => {
                    self.endpoint_analysis(item, target, endpoint, field).await?;
                }
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ssl_checker::models::QuickCheckReport;
    use async_trait::async_trait;

    struct FixedQuickCheck;

    #[async_trait]
    impl QuickCheckApi for FixedQuickCheck {
        async fn check(&self, host: &str) -> SslProbeResult<QuickCheckReport> {
            let json = format!(r#"{{"host": "{host}", "status": "ok"}}"#);
            Ok(serde_json::from_str(&json).unwrap())
        }
    }

    fn service_without_scan() -> InspectionService {
        InspectionService::new(
            Arc::new(FixedQuickCheck),
            None,
            Duration::from_millis(1),
            24,
        )
    }

    #[tokio::test]
    async fn test_quick_check_writes_result_field() {
        let service = service_without_scan();
        let mut item = PipelineItem::new();
        service.quick_check(&mut item, "example.com", "ssl").await.unwrap();
        let written = item.field("ssl").unwrap();
        assert_eq!(written.get("host").unwrap(), "example.com");
    }

    #[tokio::test]
    async fn test_scan_without_credentials_fails() {
        let service = service_without_scan();
        let mut item = PipelineItem::new();
        let err = service
            .full_scan(&mut item, "example.com", "ssl")
            .await
            .unwrap_err();
        assert!(matches!(err, SslProbeError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_run_annotates_every_item() {
        let service = service_without_scan();
        let items = vec![PipelineItem::new(), PipelineItem::new(), PipelineItem::new()];
        let op = InspectionOp::QuickCheck {
            target: "example.com".to_string(),
        };
        let out = service.run(&op, items, "ssl").await.unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|item| item.field("ssl").is_some()));
    }
}
