// ═══════════════════════════════════════════════════════════════════════
// Test suite for the decision pipeline and the agents
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::adaptive::AdaptiveAgent;
    use crate::agent::Agent;
    use crate::deploy::*;
    use crate::layout::*;
    use crate::planner::*;
    use crate::random::StallAgent;
    use crate::scan::*;
    use crate::threat::*;
    use crate::triage::*;
    use frontier_engine::board::BoardView;
    use frontier_engine::config::GameConfig;
    use frontier_engine::frame::{Frame, PlayerStats};
    use frontier_engine::map;
    use frontier_engine::state::{Command, TurnState};
    use frontier_engine::types::*;
    use std::collections::BTreeSet;

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn wall(x: i32, y: i32, owner: Player) -> Structure {
        Structure::new(at(x, y), StructureKind::Wall, owner, 12.0)
    }

    fn enemy_walls(cells: &[(i32, i32)]) -> BoardView {
        BoardView::new(cells.iter().map(|&(x, y)| wall(x, y, Player::Enemy)))
    }

    fn ledger(config: &GameConfig, turn: u32, board: BoardView, sp: f64, mp: f64) -> TurnState<'_> {
        TurnState::from_parts(config, turn, board, Pools::new(sp, mp))
    }

    fn set(cells: &[(i32, i32)]) -> BTreeSet<Position> {
        cells.iter().map(|&(x, y)| at(x, y)).collect()
    }

    fn builds(commands: &[Command]) -> Vec<Position> {
        commands
            .iter()
            .filter(|c| matches!(c, Command::Build { .. }))
            .map(|c| c.at())
            .collect()
    }

    const BOTH: GapState = GapState { left: true, right: true };
    const NEITHER: GapState = GapState { left: false, right: false };
    const LEFT_ONLY: GapState = GapState { left: true, right: false };
    const RIGHT_ONLY: GapState = GapState { left: false, right: true };

    // ═════════════════════════════════════════════════════════════════════
    // GAP SCAN TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_empty_enemy_half_is_open() {
        let scan = scan_frontier(&BoardView::default());
        assert!(scan.closed_columns().is_empty());
        assert_eq!(scan.gap_state(), BOTH);
    }

    #[test]
    fn test_own_structures_do_not_close_columns() {
        let board = BoardView::new((0..28).map(|x| wall(x, 13, Player::Me)));
        assert_eq!(scan_frontier(&board).gap_state(), BOTH);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let board = enemy_walls(&[(3, 15), (4, 15), (9, 20), (20, 14), (20, 15), (21, 16)]);
        let first = scan_frontier(&board);
        let second = scan_frontier(&board);
        assert_eq!(first, second);
        assert_eq!(first.gap_state(), second.gap_state());
    }

    #[test]
    fn test_single_blocker_fans_into_next_column() {
        let board = enemy_walls(&[(5, 16)]);
        let step = advance_column(&board, 5, &BTreeSet::new(), true);
        assert!(step.closed);
        assert!(!step.full_scan_next);
        assert_eq!(step.next, set(&[(6, 15), (6, 16), (6, 17)]));

        let scan = scan_frontier(&board);
        assert_eq!(scan.closed_columns(), vec![5]);
        assert!(scan.is_open(4) && scan.is_open(6));
    }

    #[test]
    fn test_vertical_chain_widens_fan() {
        let board = enemy_walls(&[(5, 16), (5, 17), (5, 18)]);
        let step = advance_column(&board, 5, &BTreeSet::new(), true);
        assert_eq!(step.next, set(&[(6, 15), (6, 16), (6, 17), (6, 18), (6, 19)]));
    }

    #[test]
    fn test_successors_stay_in_enemy_half() {
        let board = enemy_walls(&[(3, 14)]);
        let step = advance_column(&board, 3, &BTreeSet::new(), true);
        assert_eq!(step.next, set(&[(4, 14), (4, 15)]));
    }

    #[test]
    fn test_empty_column_hands_over_full_sweep() {
        let step = advance_column(&BoardView::default(), 6, &set(&[(6, 15)]), false);
        assert!(!step.closed);
        assert!(step.full_scan_next);
        assert!(step.next.is_empty());
    }

    #[test]
    fn test_constrained_column_ignores_far_structures() {
        // Column 6 only looks around the fan from column 5
        let board = enemy_walls(&[(5, 16), (6, 20)]);
        assert_eq!(scan_frontier(&board).closed_columns(), vec![5]);
    }

    #[test]
    fn test_sweep_resumes_after_open_column() {
        let board = enemy_walls(&[(5, 16), (20, 20)]);
        assert_eq!(scan_frontier(&board).closed_columns(), vec![5, 20]);
    }

    #[test]
    fn test_front_row_wall_closes_left_lane() {
        let cells: Vec<(i32, i32)> = (0..14).map(|x| (x, 14)).collect();
        let scan = scan_frontier(&enemy_walls(&cells));
        assert_eq!(scan.closed_columns(), (0..14).collect::<Vec<_>>());
        assert_eq!(scan.gap_state(), RIGHT_ONLY);
    }

    #[test]
    fn test_full_front_row_closes_everything() {
        let cells: Vec<(i32, i32)> = (0..28).map(|x| (x, 14)).collect();
        assert_eq!(scan_frontier(&enemy_walls(&cells)).gap_state(), NEITHER);
    }

    // ═════════════════════════════════════════════════════════════════════
    // TRIAGE TESTS
    // ═════════════════════════════════════════════════════════════════════

    fn turret(health: f64) -> Structure {
        Structure::new(at(4, 11), StructureKind::Turret, Player::Me, health)
    }

    #[test]
    fn test_threshold_boundary() {
        let config = GameConfig::default();
        let removed = |health: f64| !triage([&turret(health)], &config, 0.6).is_empty();
        assert!(removed(45.0), "ratio 0.60 is removed");
        assert!(!removed(45.75), "ratio 0.61 is kept");
        assert!(removed(44.25), "ratio 0.59 is removed");
        assert!(!removed(75.0));
    }

    #[test]
    fn test_upgraded_wall_first_turn_health() {
        let config = GameConfig::default();
        let fresh = wall(7, 10, Player::Me).upgraded();
        assert_eq!(health_ratio(&fresh, &config), Some(1.0));

        let mut damaged = wall(7, 10, Player::Me).upgraded();
        damaged.health = 60.0;
        assert_eq!(health_ratio(&damaged, &config), Some(0.5));
        assert_eq!(triage([&damaged], &config, 0.6), vec![TriageRecord::from(&damaged)]);
    }

    #[test]
    fn test_enemy_structures_never_triaged() {
        let config = GameConfig::default();
        let mut s = wall(13, 20, Player::Enemy);
        s.health = 1.0;
        assert!(triage([&s], &config, 0.6).is_empty());
    }

    #[test]
    fn test_unknown_max_health_is_skipped() {
        let json = r#"{"unitInformation": [
            {"shorthand": "FF", "cost1": 1, "startHealth": 12}, {"shorthand": "EF", "cost1": 4},
            {"shorthand": "DF", "cost1": 2, "startHealth": 75},
            {"shorthand": "PI", "cost2": 1}, {"shorthand": "EI", "cost2": 3}, {"shorthand": "SI", "cost2": 1},
            {"shorthand": "RM"}, {"shorthand": "UP"}
        ]}"#;
        let config = GameConfig::from_json(json).unwrap();
        let support = Structure::new(at(9, 9), StructureKind::Support, Player::Me, 1.0);
        let mut weak_wall = wall(7, 10, Player::Me);
        weak_wall.health = 2.0;
        let records = triage([&support, &weak_wall], &config, 0.6);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, StructureKind::Wall);
    }

    #[test]
    fn test_rebuild_queue_is_one_turn() {
        let mut queue = RebuildQueue::new();
        let record = TriageRecord { position: at(7, 10), kind: StructureKind::Wall, upgraded: true };
        queue.stage(vec![record]);
        assert_eq!(queue.take(), vec![record]);
        assert!(queue.take().is_empty());
        queue.stage(vec![record]);
        queue.stage(Vec::new());
        assert!(queue.is_empty());
    }

    // ═════════════════════════════════════════════════════════════════════
    // PLANNER TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_plan_prefix_succeeds_in_order() {
        let config = GameConfig::default();
        let mut state = ledger(&config, 1, BoardView::default(), 3.0, 0.0);
        let mut plan = BuildPlan::new();
        for x in [10, 11, 12, 13, 14] {
            plan.push(BuildRequest::build(StructureKind::Wall, &[at(x, 8)]));
        }
        let report = plan.apply(&mut state);
        assert_eq!(report.outcomes, vec![1, 1, 1, 0, 0]);
        assert_eq!(builds(&state.submit().build), vec![at(10, 8), at(11, 8), at(12, 8)]);
    }

    #[test]
    fn test_unaffordable_request_does_not_block() {
        let config = GameConfig::default();
        let mut state = ledger(&config, 1, BoardView::default(), 1.0, 0.0);
        let mut plan = BuildPlan::new();
        plan.push(BuildRequest::build(StructureKind::Turret, &[at(4, 11)]))
            .push(BuildRequest::build(StructureKind::Wall, &[at(0, 13), at(1, 13)]));
        assert_eq!(plan.apply(&mut state).outcomes, vec![0, 1]);
    }

    #[test]
    fn test_rebuild_goes_first() {
        let layout = Layout::default();
        let params = PolicyParams::default();
        let records = [
            TriageRecord { position: at(9, 9), kind: StructureKind::Support, upgraded: true },
            TriageRecord { position: at(7, 10), kind: StructureKind::Wall, upgraded: false },
        ];
        let plan = defense_plan(&layout, &params, BOTH, 8, &records, &[]);
        assert_eq!(
            &plan.requests()[..3],
            &[
                BuildRequest::build(StructureKind::Support, &[at(9, 9)]),
                BuildRequest::upgrade(&[at(9, 9)]),
                BuildRequest::build(StructureKind::Wall, &[at(7, 10)]),
            ]
        );
        assert_eq!(plan.requests()[3], BuildRequest::build(StructureKind::Wall, &layout.core_walls));
    }

    #[test]
    fn test_closed_lanes_pull_walls() {
        let layout = Layout::default();
        let plan = defense_plan(&layout, &PolicyParams::default(), NEITHER, 30, &[], &[]);
        let requests = plan.requests();
        assert!(requests.contains(&BuildRequest::remove(&layout.left.walls)));
        assert!(requests.contains(&BuildRequest::remove(&layout.right.walls)));
        assert!(!requests.contains(&BuildRequest::build(StructureKind::Wall, &layout.left.walls)));
        assert!(!requests.iter().any(|r| matches!(r, BuildRequest::Build { kind: StructureKind::Support, .. })));
    }

    #[test]
    fn test_supports_wait_for_support_turn() {
        let layout = Layout::default();
        let params = PolicyParams::default();
        let supports = |turn| {
            defense_plan(&layout, &params, RIGHT_ONLY, turn, &[], &[])
                .requests()
                .iter()
                .filter(|r| matches!(r, BuildRequest::Build { kind: StructureKind::Support, .. }))
                .count()
        };
        assert_eq!(supports(12), 0);
        assert_eq!(supports(13), layout.right.supports.len());

        let plan = defense_plan(&layout, &params, RIGHT_ONLY, 13, &[], &[]);
        assert!(plan.requests().contains(&BuildRequest::build(StructureKind::Wall, &layout.right.walls)));
        assert!(plan.requests().contains(&BuildRequest::remove(&layout.left.walls)));
    }

    #[test]
    fn test_late_upgrades_after_late_turn() {
        let layout = Layout::default();
        let params = PolicyParams::default();
        let late = BuildRequest::upgrade(&layout.late_upgrades);
        assert!(!defense_plan(&layout, &params, BOTH, 20, &[], &[]).requests().contains(&late));
        assert_eq!(defense_plan(&layout, &params, BOTH, 21, &[], &[]).requests().last(), Some(&late));
    }

    #[test]
    fn test_breach_turrets_are_opt_in() {
        let layout = Layout::default();
        let mut params = PolicyParams::default();
        let breach = |x, y| BreachEvent { location: at(x, y), owner: Player::Enemy, turn: 4 };
        let breaches = [breach(13, 0), breach(13, 0), breach(14, 0)];
        let turrets = BuildRequest::build(StructureKind::Turret, &[at(13, 1), at(14, 1)]);

        assert!(!params.breach_turrets);
        let plan = defense_plan(&layout, &params, BOTH, 22, &[], &breaches);
        assert!(!plan.requests().contains(&turrets));
        assert_eq!(plan.requests().last(), Some(&BuildRequest::upgrade(&layout.late_upgrades)));

        params.breach_turrets = true;
        let plan = defense_plan(&layout, &params, BOTH, 6, &[], &breaches);
        assert_eq!(plan.requests().last(), Some(&turrets));
    }

    #[test]
    fn test_core_walls_take_budget_first() {
        let config = GameConfig::default();
        let layout = Layout::default();
        let mut state = ledger(&config, 1, BoardView::default(), 10.0, 0.0);
        defense_plan(&layout, &PolicyParams::default(), BOTH, 1, &[], &[]).apply(&mut state);
        assert_eq!(builds(&state.submit().build), layout.core_walls[..10].to_vec());
    }

    // ═════════════════════════════════════════════════════════════════════
    // DEPLOYMENT TESTS
    // ═════════════════════════════════════════════════════════════════════

    fn interceptor(x: i32, y: i32) -> SpawnRequest {
        SpawnRequest::new(MobileKind::Interceptor, at(x, y), 1)
    }

    #[test]
    fn test_opening_ignores_gap() {
        let layout = Layout::default();
        let params = PolicyParams::default();
        let opening = vec![SpawnRequest::new(MobileKind::Demolisher, at(4, 9), 2)];
        for turn in 0..=5 {
            assert_eq!(deployment(&layout, &params, NEITHER, turn), opening);
            assert_eq!(deployment(&layout, &params, BOTH, turn), opening);
        }
    }

    #[test]
    fn test_no_open_lane_holds() {
        let requests = deployment(&Layout::default(), &PolicyParams::default(), NEITHER, 31);
        assert!(requests.is_empty());
    }

    #[test]
    fn test_both_lanes_before_escalation() {
        let requests = deployment(&Layout::default(), &PolicyParams::default(), BOTH, 8);
        assert_eq!(requests, vec![interceptor(7, 6), interceptor(20, 6)]);
    }

    #[test]
    fn test_both_lanes_escalate_and_burst() {
        let requests = deployment(&Layout::default(), &PolicyParams::default(), BOTH, 31);
        assert_eq!(
            requests,
            vec![
                interceptor(7, 6),
                interceptor(20, 6),
                interceptor(8, 5),
                interceptor(19, 5),
                interceptor(6, 7),
                interceptor(21, 7),
                SpawnRequest::new(MobileKind::Demolisher, at(4, 9), 3),
                SpawnRequest::new(MobileKind::Scout, at(3, 10), MAX_BURST),
            ]
        );
    }

    #[test]
    fn test_tight_budget_alternates_lanes() {
        let config = GameConfig::default();
        let mut state = ledger(&config, 31, BoardView::default(), 0.0, 4.0);
        let requests = deployment(&Layout::default(), &PolicyParams::default(), BOTH, 31);
        assert_eq!(apply_deployment(&requests, &mut state), 4);
        let placed: Vec<Position> = state.submit().deploy.iter().map(|c| c.at()).collect();
        assert_eq!(placed, vec![at(7, 6), at(20, 6), at(8, 5), at(19, 5)]);
    }

    #[test]
    fn test_left_lane_only() {
        let requests = deployment(&Layout::default(), &PolicyParams::default(), LEFT_ONLY, 25);
        assert_eq!(
            requests,
            vec![
                interceptor(7, 6),
                interceptor(8, 5),
                interceptor(6, 7),
                SpawnRequest::new(MobileKind::Demolisher, at(4, 9), 3),
                SpawnRequest::new(MobileKind::Scout, at(3, 10), MAX_BURST),
            ]
        );
    }

    #[test]
    fn test_single_lane_concentrates() {
        let requests = deployment(&Layout::default(), &PolicyParams::default(), RIGHT_ONLY, 25);
        assert_eq!(
            requests,
            vec![
                interceptor(20, 6),
                interceptor(19, 5),
                interceptor(21, 7),
                SpawnRequest::new(MobileKind::Demolisher, at(23, 9), 3),
                SpawnRequest::new(MobileKind::Scout, at(24, 10), MAX_BURST),
            ]
        );
        // Higher cap: four extra interceptors late in the game
        let late = deployment(&Layout::default(), &PolicyParams::default(), RIGHT_ONLY, 50);
        assert_eq!(late.iter().filter(|r| r.kind == MobileKind::Interceptor).count(), 5);
    }

    #[test]
    fn test_burst_cadence() {
        let params = PolicyParams::default();
        let firing = |range: std::ops::Range<u32>| range.filter(|&t| burst_fires(&params, t)).collect::<Vec<_>>();
        assert_eq!(firing(0..20), vec![1, 6, 11, 16]);
        assert_eq!(firing(20..40), vec![25, 31, 37]);
        assert_eq!(firing(40..60), vec![43, 50, 57]);
        assert_eq!(firing(60..80), vec![65, 73]);
    }

    #[test]
    fn test_heavy_burst_size_grows() {
        let params = PolicyParams::default();
        assert_eq!(heavy_burst_size(&params, 1), 2);
        assert_eq!(heavy_burst_size(&params, 25), 3);
        assert_eq!(heavy_burst_size(&params, 41), 4);
        assert_eq!(heavy_burst_size(&params, 43), 4);
        assert_eq!(heavy_burst_size(&params, 65), 4);
    }

    #[test]
    fn test_interceptor_slots_rotate() {
        assert_eq!(InterceptorSlot::rotating(0), InterceptorSlot::Far);
        assert_eq!(InterceptorSlot::rotating(1), InterceptorSlot::Near);
        assert_eq!(InterceptorSlot::rotating(2), InterceptorSlot::Mid);
        assert_eq!(InterceptorSlot::rotating(3), InterceptorSlot::Far);
    }

    #[test]
    fn test_deployment_spends_remaining_budget() {
        let config = GameConfig::default();
        let mut state = ledger(&config, 31, BoardView::default(), 0.0, 10.0);
        let requests = deployment(&Layout::default(), &PolicyParams::default(), BOTH, 31);
        // Six interceptors, one demolisher, then one scout from the last point
        assert_eq!(apply_deployment(&requests, &mut state), 8);
        assert_eq!(state.pools().mobile, 0.0);
    }

    #[test]
    fn test_spawn_points_are_on_friendly_edges() {
        let layout = Layout::default();
        for lane in Lane::BOTH {
            let l = layout.lane(lane);
            for p in l.interceptor_points.iter().chain([&l.fast_spawn, &l.slow_spawn]) {
                assert!(map::is_friendly_edge(*p), "{} on {} lane", p, lane);
            }
        }
    }

    // ═════════════════════════════════════════════════════════════════════
    // THREAT TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_support_shielding() {
        assert_eq!(support_shielding(20, false), 3.0);
        assert!((support_shielding(17, true) - 5.4).abs() < 1e-9);
    }

    #[test]
    fn test_threat_reserve() {
        let supports = (10..15).map(|x| Structure::new(at(x, 18), StructureKind::Support, Player::Enemy, 30.0));
        let board = BoardView::new(supports);
        let enemy = PlayerStats { health: 30.0, pools: Pools::new(0.0, 12.0), time_ms: 0.0 };
        let threat = assess(&board, &enemy);
        assert_eq!(threat.enemy_shielding, 15.0);
        assert_eq!(threat.interceptor_reserve, 2);

        let calm = assess(&BoardView::default(), &PlayerStats::default());
        assert_eq!(calm.interceptor_reserve, 0);
    }

    // ═════════════════════════════════════════════════════════════════════
    // AGENT TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_triage_round_trip_through_agent() {
        let config = GameConfig::default();
        let mut agent = AdaptiveAgent::default();
        let mut damaged = wall(7, 10, Player::Me).upgraded();
        damaged.health = 30.0;
        let record = TriageRecord::from(&damaged);

        // Turn N: removal queued, record staged
        let mut state = ledger(&config, 8, BoardView::new([damaged]), 0.0, 0.0);
        agent.on_turn(&mut state);
        assert_eq!(state.submit().build, vec![Command::Remove { at: at(7, 10) }]);
        assert_eq!(agent.pending_rebuild(), &[record]);

        // Turn N+1: the engine removed it; rebuild comes first
        let mut state = ledger(&config, 9, BoardView::default(), 40.0, 0.0);
        agent.on_turn(&mut state);
        let report = agent.last_report().unwrap().clone();
        assert_eq!(report.rebuilt, vec![record]);
        let build = state.submit().build;
        assert_eq!(&build[..2], &[
            Command::Build { kind: StructureKind::Wall, at: at(7, 10) },
            Command::Upgrade { at: at(7, 10) },
        ]);
        assert_eq!(builds(&build).iter().filter(|&&p| p == at(7, 10)).count(), 1);
        assert!(agent.pending_rebuild().is_empty());

        // Turn N+2: nothing left to rebuild
        let mut state = ledger(&config, 10, BoardView::default(), 40.0, 0.0);
        agent.on_turn(&mut state);
        assert!(agent.last_report().unwrap().rebuilt.is_empty());
    }

    #[test]
    fn test_rebuild_queued_before_removals() {
        let config = GameConfig::default();
        let mut agent = AdaptiveAgent::default();
        let mut damaged = wall(7, 10, Player::Me);
        damaged.health = 2.0;
        let mut state = ledger(&config, 8, BoardView::new([damaged]), 0.0, 0.0);
        agent.on_turn(&mut state);

        let mut weak = wall(4, 12, Player::Me);
        weak.health = 2.0;
        let mut state = ledger(&config, 9, BoardView::new([weak]), 10.0, 0.0);
        agent.on_turn(&mut state);
        let build = state.submit().build;
        assert_eq!(&build[..2], &[
            Command::Build { kind: StructureKind::Wall, at: at(7, 10) },
            Command::Remove { at: at(4, 12) },
        ]);
        assert_eq!(agent.last_report().unwrap().plan.outcomes[0], 1);
    }

    #[test]
    fn test_agent_is_deterministic() {
        let config = GameConfig::default();
        let board = BoardView::new(
            (0..14).map(|x| wall(x, 14, Player::Enemy)).chain([wall(4, 12, Player::Me)]),
        );
        let decide = || {
            let mut agent = AdaptiveAgent::default();
            let mut state = ledger(&config, 26, board.clone(), 30.0, 12.0);
            agent.on_turn(&mut state);
            state.submit()
        };
        assert_eq!(decide(), decide());
    }

    #[test]
    fn test_agent_reports_turn() {
        let config = GameConfig::default();
        let mut agent = AdaptiveAgent::default();
        let enemy = PlayerStats { health: 30.0, pools: Pools::new(0.0, 15.0), time_ms: 0.0 };
        let mut state = ledger(&config, 3, BoardView::default(), 5.0, 6.0).with_enemy(enemy);
        agent.on_turn(&mut state);
        let report = agent.last_report().unwrap();
        assert_eq!(report.turn, 3);
        assert_eq!(report.gap, BOTH);
        assert_eq!(report.spawned, 2);
        assert_eq!(report.plan.total(), 5);
        assert_eq!(report.threat.interceptor_reserve, 1);
    }

    #[test]
    fn test_breach_log_keeps_opponent_breaches() {
        let mut agent = AdaptiveAgent::default();
        let frame = Frame::parse(
            r#"{"turnInfo": [1, 7, 40, 0], "p1Stats": [27, 3, 2, 0], "p2Stats": [30, 3, 2, 0],
                "events": {"breach": [[[13, 0], 1, 3, "11", 2], [[14, 27], 1, 3, "12", 1]]}}"#,
        )
        .unwrap();
        agent.on_action_frame(&frame);
        assert_eq!(
            agent.breaches(),
            &[BreachEvent { location: at(13, 0), owner: Player::Enemy, turn: 7 }]
        );

        let bad = Frame::parse(
            r#"{"turnInfo": [1, 7, 41, 0], "p1Stats": [27, 3, 2, 0], "p2Stats": [30, 3, 2, 0],
                "events": {"breach": [[13, 0]]}}"#,
        )
        .unwrap();
        agent.on_action_frame(&bad);
        assert_eq!(agent.breaches().len(), 1);
    }

    #[test]
    fn test_stall_agent_spends_mobile_budget() {
        let config = GameConfig::default();
        let mut agent = StallAgent::new(7);
        let mut state = ledger(&config, 2, BoardView::default(), 0.0, 5.0);
        agent.on_turn(&mut state);
        let submission = state.submit();
        assert!(submission.build.is_empty());
        assert_eq!(submission.deploy.len(), 5);
        assert!(submission.deploy.iter().all(|c| map::is_friendly_edge(c.at())));
    }

    #[test]
    fn test_stall_agent_avoids_blocked_cells() {
        let config = GameConfig::default();
        let edges = map::friendly_edges();
        let open = edges[3];
        let board = BoardView::new(edges.iter().filter(|&&p| p != open).map(|p| wall(p.x, p.y, Player::Me)));
        let mut agent = StallAgent::new(1);
        let mut state = ledger(&config, 2, board, 0.0, 3.0);
        agent.on_turn(&mut state);
        let deploy = state.submit().deploy;
        assert_eq!(deploy.len(), 3);
        assert!(deploy.iter().all(|c| c.at() == open));
    }

    #[test]
    fn test_stall_agent_seeded() {
        let config = GameConfig::default();
        let run = |seed| {
            let mut agent = StallAgent::new(seed);
            let mut state = ledger(&config, 2, BoardView::default(), 0.0, 6.0);
            agent.on_turn(&mut state);
            state.submit()
        };
        assert_eq!(run(42), run(42));
    }

    // ═════════════════════════════════════════════════════════════════════
    // STRATEGY CONFIG TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_partial_policy_file_keeps_defaults() {
        let config: StrategyConfig = serde_json::from_str(r#"{"params": {"support_turn": 3}}"#).unwrap();
        assert_eq!(config.params.support_turn, 3);
        assert_eq!(config.params.triage_threshold, 0.6);
        assert_eq!(config.layout, Layout::default());
    }

    #[test]
    fn test_layout_positions_as_pairs() {
        let text = serde_json::to_string(&StrategyConfig::default()).unwrap();
        assert!(text.contains(r#""fast_spawn":[3,10]"#), "{}", text);
        let back: StrategyConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, StrategyConfig::default());
    }
}
