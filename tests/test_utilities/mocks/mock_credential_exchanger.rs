use rhsm_updates::prelude::*;

/// Mock CredentialExchanger for testing
///
/// Hands out `access-<offline token>` unless configured to fail, in which
/// case it answers like an SSO endpoint rejecting the token.
#[derive(Default)]
pub struct MockCredentialExchanger {
    rejection_body: Option<String>,
}

#[allow(dead_code)]
impl MockCredentialExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(body: &str) -> Self {
        Self {
            rejection_body: Some(body.to_string()),
        }
    }
}

impl CredentialExchanger for MockCredentialExchanger {
    fn exchange(&self, offline: &OfflineCredential) -> Result<AccessCredential> {
        match &self.rejection_body {
            Some(body) => Err(ReportError::Authentication {
                details: "token endpoint returned HTTP 400 Bad Request".to_string(),
                body: body.clone(),
            }
            .into()),
            None => Ok(AccessCredential::new(
                format!("access-{}", offline.expose()),
                Some(900),
            )),
        }
    }
}
