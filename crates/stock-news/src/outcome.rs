use std::fmt::{self, Display};

use notifier::Delivery;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    NoArticles,
    Delivered(Vec<Delivery>),
}

impl Outcome {
    pub fn failed(&self) -> usize {
        match self {
            Outcome::NoArticles => 0,
            Outcome::Delivered(deliveries) => deliveries
                .iter()
                .filter(|delivery| !delivery.is_sent())
                .count(),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoArticles => write!(f, "no news found"),
            Outcome::Delivered(deliveries) => write!(
                f,
                "delivered {}/{} chunks",
                deliveries.len() - self.failed(),
                deliveries.len()
            ),
        }
    }
}
