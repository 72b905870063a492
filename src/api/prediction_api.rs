// ==========================================
// Rebanho - previsão de parto na aplicação
// ==========================================
// A aritmética local (inseminação + gestação) é sempre a fonte da
// verdade. Um conselheiro externo pode enriquecer o resultado com
// um texto de orientação; falha dele vira mensagem no relatório e
// nunca altera os números.
// ==========================================

use crate::api::{ApiResult, HerdApp};
use crate::engine::calving::{predict_iso, CalvingPrediction};
use chrono::NaiveDate;
use tracing::warn;

/// Fonte opcional de orientação textual sobre uma previsão.
pub trait CalvingAdvisor {
    fn advise(&self, prediction: &CalvingPrediction) -> Result<String, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalvingReport {
    pub prediction: CalvingPrediction,
    /// Texto do conselheiro, quando houver e quando ele responder.
    pub advisory: Option<String>,
    /// Falha do conselheiro, apenas informativa.
    pub advisory_error: Option<String>,
}

impl HerdApp {
    pub fn predict_calving(&self, insemination: &str, today: NaiveDate) -> ApiResult<CalvingReport> {
        self.predict_calving_with_advisor(insemination, today, None)
    }

    pub fn predict_calving_with_advisor(
        &self,
        insemination: &str,
        today: NaiveDate,
        advisor: Option<&dyn CalvingAdvisor>,
    ) -> ApiResult<CalvingReport> {
        let prediction = predict_iso(insemination, today)?;

        let mut report = CalvingReport {
            prediction,
            advisory: None,
            advisory_error: None,
        };
        if let Some(advisor) = advisor {
            match advisor.advise(&prediction) {
                Ok(text) => report.advisory = Some(text),
                Err(message) => {
                    warn!(message, "conselheiro de parto indisponível");
                    report.advisory_error = Some(message);
                }
            }
        }
        Ok(report)
    }
}
