use crate::model::SecurityCode;
use rand::Rng;

/// Produces one-time login codes.
pub trait SecurityCodeGenerator: Send + Sync {
    fn generate_code(&self) -> SecurityCode;
}

/// Random 6-digit numeric codes.
#[derive(Debug, Clone, Default)]
pub struct RandomCodeGenerator;

impl SecurityCodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> SecurityCode {
        let code: u32 = rand::rng().random_range(100_000..1_000_000);
        SecurityCode::from(code)
    }
}
