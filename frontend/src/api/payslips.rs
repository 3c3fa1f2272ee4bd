use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, BinaryDocument, GeneratePayslipRequest, Payslip},
};

impl ApiClient {
    pub async fn list_payslips(&self, employee_id: &str) -> Result<Vec<Payslip>, ApiError> {
        let url = self
            .endpoint(&format!("/hr/payslip/{}", encode_segment(employee_id)))
            .await;
        let response = self.send(self.authorize(self.http_client().get(url))).await?;
        Ok(
            Self::expect_json::<Vec<Payslip>>(response, "Failed to load payslips.")
                .await?
                .unwrap_or_default(),
        )
    }

    pub async fn download_payslip(&self, payslip_id: &str) -> Result<BinaryDocument, ApiError> {
        let url = self
            .endpoint(&format!(
                "/hr/payslip/{}/download",
                encode_segment(payslip_id)
            ))
            .await;
        let response = self
            .send(
                self.authorize(self.http_client().get(url))
                    .header(reqwest::header::ACCEPT, "application/pdf"),
            )
            .await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/pdf")
            .to_string();
        let (status, bytes) = Self::read_body(response).await?;
        if !status.is_success() {
            return Err(super::client::error_from_body(
                status,
                &bytes,
                "Failed to download payslip.",
            ));
        }
        Ok(BinaryDocument {
            bytes,
            content_type,
        })
    }

    pub async fn delete_payslip(&self, payslip_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!(
                "/hr/delete/payslip/{}",
                encode_segment(payslip_id)
            ))
            .await;
        let response = self
            .send(self.authorize(self.http_client().delete(url)))
            .await?;
        Self::expect_success(response, "Failed to delete payslip.")
            .await
            .map(|_| ())
    }

    pub async fn generate_payslip(
        &self,
        employee_id: &str,
        payslip_month: &str,
    ) -> Result<Option<String>, ApiError> {
        let url = self
            .endpoint(&format!(
                "/hr/payslip/generate/{}",
                encode_segment(employee_id)
            ))
            .await;
        let body = GeneratePayslipRequest {
            payslip_month: payslip_month.to_string(),
        };
        let response = self
            .send(self.authorize(self.http_client().post(url)).json(&body))
            .await?;
        Self::expect_success(response, "Failed to generate payslip.").await
    }
}
