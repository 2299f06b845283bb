use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    Admin,
    Consumer,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Admin => write!(f, "admin"),
            Stage::Consumer => write!(f, "consumer"),
        }
    }
}

#[derive(Debug)]
pub struct StageError {
    pub stage: Stage,
    pub error: anyhow::Error,
}

impl StageError {
    pub fn admin(error: anyhow::Error) -> Self {
        Self {
            stage: Stage::Admin,
            error,
        }
    }

    pub fn consumer(error: anyhow::Error) -> Self {
        Self {
            stage: Stage::Consumer,
            error,
        }
    }
}

impl Display for StageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.stage, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn admin_errors_carry_their_stage_tag() {
        let error = StageError::admin(anyhow!("Connection refused"));

        assert_eq!(error.to_string(), "admin: Connection refused");
    }

    #[test]
    fn consumer_errors_flatten_the_context_chain() {
        let inner: Result<(), anyhow::Error> = Err(anyhow!("Broker transport failure"));
        let error = StageError::consumer(inner.context("While subscribing to topic").unwrap_err());

        assert_eq!(
            error.to_string(),
            "consumer: While subscribing to topic: Broker transport failure"
        );
    }
}
