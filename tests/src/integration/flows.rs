//! # Integration Test Flows
//!
//! A handshake as the transport delivers it: raw positional parameters are
//! parsed, routed through the direct-peer guard, evaluated, and the decision
//! is carried out against the host collaborators.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use link_handshake::testing::{ManualClock, RecordingCollaborators, StaticPeerDirectory};
    use link_handshake::{
        CachedClock, Decision, FindingKind, HandshakeAnnouncement, HandshakeConfig,
        HandshakeError, LinkCollaborators, LinkHandshakeApi, LinkHandshakeService, PeerId,
        RejectReason, StaticConfigProvider, Timestamp, TomlConfigProvider, TracingLinkLog,
        TracingNotifier, REASON_CAPACITY,
    };

    const T: i64 = 1_700_000_000;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn hub() -> PeerId {
        PeerId::new(1)
    }

    fn recorded() -> RecordingCollaborators {
        RecordingCollaborators::new(
            StaticPeerDirectory::new()
                .with_peer(hub(), "hub.example.net", "192.0.2.1")
                .with_peer(PeerId::new(2), "leaf.example.net", "198.51.100.2"),
        )
    }

    fn service_at(
        config: HandshakeConfig,
        clock: Arc<ManualClock>,
        recorded: &RecordingCollaborators,
    ) -> LinkHandshakeService {
        LinkHandshakeService::new(config, clock, recorded.collaborators()).expect("valid config")
    }

    fn scenario_config() -> HandshakeConfig {
        HandshakeConfig {
            current_protocol_version: 6,
            min_supported_protocol_version: 3,
            warn_skew_secs: 5,
            max_skew_secs: 10,
        }
    }

    fn params(peer_time: i64) -> [String; 4] {
        HandshakeAnnouncement::new(6, 3, Timestamp::new(peer_time)).to_params()
    }

    // =============================================================================
    // WIRE → SERVICE
    // =============================================================================

    #[test]
    fn test_parsed_handshake_accepted() {
        link_telemetry::init_test_tracing();
        let recorded = recorded();
        let service = service_at(scenario_config(), Arc::new(ManualClock::new(T + 3)), &recorded);

        let announcement = HandshakeAnnouncement::from_params(&params(T)).expect("well formed");
        let decision = service
            .on_announcement(hub(), hub(), &announcement)
            .expect("direct peer");

        assert_eq!(decision, Decision::accepted());
        assert!(recorded.is_quiet());
    }

    #[test]
    fn test_malformed_handshake_never_reaches_service() {
        let result = HandshakeAnnouncement::from_params(&["6", "3", "0", "12:00"]);
        assert!(matches!(
            result,
            Err(HandshakeError::MalformedHandshake {
                field: "peer_time",
                ..
            })
        ));

        let result = HandshakeAnnouncement::from_params(&["6"]);
        assert!(matches!(
            result,
            Err(HandshakeError::MissingParameters { actual: 1, .. })
        ));
    }

    #[test]
    fn test_local_announcement_round_trips_through_peer() {
        // Two servers on the same defaults, clocks 4 seconds apart
        let recorded = recorded();
        let ours = service_at(
            HandshakeConfig::default(),
            Arc::new(ManualClock::new(T)),
            &recorded,
        );
        let theirs = service_at(
            HandshakeConfig::default(),
            Arc::new(ManualClock::new(T + 4)),
            &recorded,
        );

        let sent = ours.local_announcement().to_params();
        let received = HandshakeAnnouncement::from_params(&sent).expect("well formed");

        assert_eq!(theirs.evaluate(hub(), &received), Decision::accepted());
    }

    // =============================================================================
    // REJECTION FLOWS
    // =============================================================================

    #[test]
    fn test_only_offending_peer_is_dropped() {
        let recorded = recorded();
        let clock = Arc::new(ManualClock::new(T));
        let service = service_at(scenario_config(), clock, &recorded);

        let good = HandshakeAnnouncement::from_params(&params(T - 2)).expect("well formed");
        let bad = HandshakeAnnouncement::from_params(&params(T - 60)).expect("well formed");

        let leaf = PeerId::new(2);
        let accepted = service.on_announcement(hub(), hub(), &good).expect("direct peer");
        let rejected = service.on_announcement(leaf, leaf, &bad).expect("direct peer");
        assert!(accepted.is_accepted());
        assert!(!rejected.is_accepted());

        // The same bad announcement relayed through the hub changes nothing
        let relayed = service.on_announcement(hub(), leaf, &bad);
        assert!(matches!(relayed, Err(HandshakeError::RelayedAnnouncement)));

        let terminated = recorded.terminator.terminated();
        assert_eq!(terminated.len(), 1);
        assert_eq!(terminated[0].0, PeerId::new(2));
        assert_eq!(recorded.autoconnect.disabled(), vec!["leaf.example.net"]);
    }

    #[test]
    fn test_excessive_skew_disables_autoconnect_exactly_once() {
        let recorded = recorded();
        let service = service_at(scenario_config(), Arc::new(ManualClock::new(T)), &recorded);
        let announcement = HandshakeAnnouncement::new(6, 3, Timestamp::new(T + 11));

        let decision = service.evaluate(hub(), &announcement);

        assert_eq!(
            decision.rejection().map(RejectReason::kind),
            Some(FindingKind::ExcessiveClockSkew)
        );
        assert_eq!(recorded.autoconnect.disabled().len(), 1);
        assert_eq!(recorded.terminator.terminated().len(), 1);
        assert_eq!(recorded.notifier.notices().len(), 1);
        assert_eq!(recorded.log.entries().len(), 1);
    }

    #[test]
    fn test_long_server_names_do_not_overflow_reason() {
        let long_name = "x".repeat(400);
        let recorded = RecordingCollaborators::new(StaticPeerDirectory::new().with_peer(
            hub(),
            &long_name,
            "192.0.2.1",
        ));
        let clock = Arc::new(ManualClock::new(i64::MAX));
        let service = service_at(scenario_config(), clock, &recorded);
        let announcement = HandshakeAnnouncement::new(6, 3, Timestamp::new(i64::MIN));

        service.evaluate(hub(), &announcement);

        let terminated = recorded.terminator.terminated();
        assert!(terminated[0].1.len() < REASON_CAPACITY);
        // Notices name the link in full
        assert!(recorded.notifier.notices()[0].text.contains(&long_name));
    }

    // =============================================================================
    // PRODUCTION ADAPTERS
    // =============================================================================

    #[test]
    fn test_service_with_tracing_sinks_and_cached_clock() {
        link_telemetry::init_test_tracing();
        let recorded = recorded();
        let collaborators = LinkCollaborators {
            notifier: Arc::new(TracingNotifier::new()),
            log: Arc::new(TracingLinkLog::new()),
            ..recorded.collaborators()
        };

        let manual = ManualClock::new(T);
        manual.advance(8);
        let clock = Arc::new(CachedClock::new(manual));
        let service = LinkHandshakeService::from_provider(
            &StaticConfigProvider::new()
                .with_protocol_range(3, 6)
                .with_skew_thresholds(5, 10),
            clock.clone(),
            collaborators,
        )
        .expect("valid config");

        let announcement = HandshakeAnnouncement::from_params(&params(T)).expect("well formed");
        let decision = service.evaluate(hub(), &announcement);

        assert_eq!(decision.warning().map(|w| w.skew.delta), Some(8));
        assert_eq!(clock.current().as_secs(), T + 8);
        assert!(recorded.terminator.terminated().is_empty());
    }

    #[test]
    fn test_toml_config_drives_service() {
        let provider = TomlConfigProvider::parse(
            r#"
            [protocol]
            current_version = 6
            min_version = 5

            [clock]
            warn_delta_secs = 5
            max_delta_secs = 10
            "#,
        )
        .expect("valid config");
        let recorded = recorded();
        let service = LinkHandshakeService::from_provider(
            &provider,
            Arc::new(ManualClock::new(T)),
            recorded.collaborators(),
        )
        .expect("valid config");

        let decision = service.evaluate(
            hub(),
            &HandshakeAnnouncement::from_params(&["4", "4", "0", "0"]).expect("well formed"),
        );

        assert_eq!(
            decision.rejection().map(RejectReason::kind),
            Some(FindingKind::IncompatibleVersion)
        );
        assert_eq!(
            recorded.terminator.terminated()[0].1.as_str(),
            "Incompatible TS version (4,4)"
        );
    }
}
