//! # Randomized Handshake Properties
//!
//! Random revision ranges, thresholds and clock offsets, checked against the
//! accept/warn/reject rules and the collaborator calls each outcome implies.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use link_handshake::testing::{ManualClock, RecordingCollaborators, StaticPeerDirectory};
    use link_handshake::{
        Decision, HandshakeAnnouncement, HandshakeConfig, LinkHandshakeApi, LinkHandshakeService,
        PeerId, RejectReason, Timestamp,
    };

    const ITERATIONS: usize = 2_000;
    const T: i64 = 1_700_000_000;

    struct Case {
        config: HandshakeConfig,
        peer_min: i64,
        peer_current: i64,
        offset: i64,
    }

    fn random_case(rng: &mut StdRng) -> Case {
        let local_min = rng.gen_range(1..=8);
        let local_current = rng.gen_range(local_min..=10);
        let warn = rng.gen_range(0..=60);
        let max = rng.gen_range(warn..=120);
        let peer_min = rng.gen_range(-1..=10);
        let peer_current = rng.gen_range(peer_min..=12);

        Case {
            config: HandshakeConfig {
                current_protocol_version: local_current,
                min_supported_protocol_version: local_min,
                warn_skew_secs: warn,
                max_skew_secs: max,
            },
            peer_min,
            peer_current,
            offset: rng.gen_range(-200..=200),
        }
    }

    fn run(case: &Case) -> (Decision, RecordingCollaborators, Arc<ManualClock>) {
        let recorded = RecordingCollaborators::new(StaticPeerDirectory::new());
        let clock = Arc::new(ManualClock::new(T));
        let service =
            LinkHandshakeService::new(case.config.clone(), clock.clone(), recorded.collaborators())
                .expect("valid config");
        let announcement = HandshakeAnnouncement::new(
            case.peer_current,
            case.peer_min,
            Timestamp::new(T + case.offset),
        );
        let decision = service.evaluate(PeerId::new(1), &announcement);
        (decision, recorded, clock)
    }

    fn ranges_disjoint(case: &Case) -> bool {
        i64::from(case.config.current_protocol_version) < case.peer_min
            || case.peer_current < i64::from(case.config.min_supported_protocol_version)
    }

    #[test]
    fn test_decision_matches_rules() {
        let mut rng = StdRng::seed_from_u64(0x5EED_1);

        for _ in 0..ITERATIONS {
            let case = random_case(&mut rng);
            let (decision, recorded, clock) = run(&case);
            let delta = case.offset.unsigned_abs();

            if ranges_disjoint(&case) {
                assert!(matches!(
                    decision,
                    Decision::Rejected(RejectReason::IncompatibleVersion(_))
                ));
                assert_eq!(clock.refresh_count(), 0);
                assert!(recorded.autoconnect.disabled().is_empty());
                assert_eq!(recorded.terminator.terminated().len(), 1);
                // Version notices never mention the clock
                assert!(!recorded.notifier.notices()[0].text.contains("delta"));
            } else if delta > case.config.max_skew_secs {
                assert!(matches!(
                    decision,
                    Decision::Rejected(RejectReason::ExcessiveClockSkew(skew)) if skew.delta == delta
                ));
                assert_eq!(recorded.autoconnect.disabled().len(), 1);
                assert_eq!(recorded.terminator.terminated().len(), 1);
            } else if delta > case.config.warn_skew_secs {
                assert_eq!(decision.warning().map(|w| w.skew.delta), Some(delta));
                assert!(recorded.terminator.terminated().is_empty());
                assert!(recorded.autoconnect.disabled().is_empty());
                assert_eq!(recorded.notifier.notices().len(), 1);
            } else {
                assert_eq!(decision, Decision::accepted());
                assert!(recorded.is_quiet());
            }
        }
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2);

        for _ in 0..ITERATIONS {
            let mut case = random_case(&mut rng);
            case.peer_min = i64::from(case.config.min_supported_protocol_version);
            case.peer_current = i64::from(case.config.current_protocol_version);

            // delta == max: never excessive
            case.offset = case.config.max_skew_secs as i64;
            let (decision, recorded, _) = run(&case);
            assert!(decision.is_accepted());
            assert!(recorded.autoconnect.disabled().is_empty());

            // delta == warn: never warns
            case.offset = -(case.config.warn_skew_secs as i64);
            let (decision, _, _) = run(&case);
            assert_eq!(decision, Decision::accepted());
        }
    }
}
