closed_set! {
    /// Kind of actor registered with the regulator.
    ///
    /// `Producers` is a producer organisation (OPA).
    ActorType, ACTOR_TYPES, "actor type" {
        Producer => "PRODUCER",
        Transformer => "TRANSFORMER",
        Producers => "PRODUCERS",
        Buyer => "BUYER",
        Exporter => "EXPORTER",
    }
}

impl ActorType {
    /// True for producer organisations (OPA).
    pub fn is_opa(&self) -> bool {
        matches!(self, ActorType::Producers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opa_is_the_producers_actor_type() {
        let opa: ActorType = "PRODUCERS".parse().unwrap();
        assert!(opa.is_opa());
        assert!(!ActorType::Producer.is_opa());
    }

    #[test]
    fn lowercase_actor_type_is_rejected() {
        assert!("buyer".parse::<ActorType>().is_err());
    }
}
