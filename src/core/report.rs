use crate::core::{FetchOutcome, SampleFile};

pub fn report_message(sample: &SampleFile, outcome: &FetchOutcome) -> String {
    let destination = sample.destination.display();
    match outcome {
        FetchOutcome::Downloaded(summary) if summary.looks_like_pdf => format!(
            "✅ Sample PDF saved to {} ({} bytes)",
            destination, summary.bytes_written
        ),
        FetchOutcome::Downloaded(summary) => format!(
            "✅ Sample saved to {} ({} bytes)\n⚠️  The file does not look like a PDF; \
             replace it with a multi-page PDF if extraction fails",
            destination, summary.bytes_written
        ),
        FetchOutcome::ManualPlacementRequired(e) => format!(
            "⚠️  Could not download the sample PDF: {}\n💡 Please place a multi-page PDF manually at {}",
            e.user_friendly_message(),
            destination
        ),
    }
}

/// Prints the outcome for the operator. Never fails.
pub fn report(sample: &SampleFile, outcome: &FetchOutcome) {
    println!("{}", report_message(sample, outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DownloadSummary;
    use crate::utils::error::FetchError;

    fn sample() -> SampleFile {
        SampleFile::new("https://example.com/dummy.pdf", "inputs/bray_sample.pdf")
    }

    #[test]
    fn test_success_names_destination() {
        let outcome = FetchOutcome::Downloaded(DownloadSummary {
            bytes_written: 13264,
            looks_like_pdf: true,
        });
        let message = report_message(&sample(), &outcome);
        assert!(message.contains("inputs/bray_sample.pdf"));
        assert!(message.contains("13264 bytes"));
        assert!(!message.contains("manually"));
    }

    #[test]
    fn test_non_pdf_body_is_flagged() {
        let outcome = FetchOutcome::Downloaded(DownloadSummary {
            bytes_written: 5,
            looks_like_pdf: false,
        });
        assert!(report_message(&sample(), &outcome).contains("does not look like a PDF"));
    }

    #[test]
    fn test_failure_asks_for_manual_placement() {
        let outcome = FetchOutcome::ManualPlacementRequired(FetchError::Status {
            url: "https://example.com/dummy.pdf".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        });
        let message = report_message(&sample(), &outcome);
        assert!(message.contains("multi-page PDF manually at inputs/bray_sample.pdf"));
        assert!(message.contains("404"));
    }
}
