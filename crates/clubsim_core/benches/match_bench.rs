use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clubsim_core::{simulate_batch, simulate_match, MatchConfig, Player, Position, SkillSet, Team};

fn bench_team(name: &str, skill: u8) -> Team {
    let positions = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Defender,
        Position::Defender,
        Position::Defender,
        Position::Midfielder,
        Position::Midfielder,
        Position::Midfielder,
        Position::Midfielder,
        Position::Attacker,
        Position::Attacker,
    ];
    let players = positions
        .iter()
        .enumerate()
        .map(|(i, &position)| Player {
            id: format!("{name}-{i}"),
            name: format!("{name} Player {i}"),
            position,
            age: Some(25),
            skills: SkillSet::uniform(skill),
            overall: None,
            is_starter: true,
            is_captain: i == 0,
        })
        .collect();
    Team { id: name.to_lowercase(), name: name.to_string(), formation: "4-4-2".to_string(), players }
}

fn full_match(c: &mut Criterion) {
    let home = bench_team("Home", 62);
    let away = bench_team("Away", 58);
    c.bench_function("simulate_90_minutes", |b| {
        b.iter(|| {
            simulate_match(black_box(&home), black_box(&away), MatchConfig::default(), 42).unwrap()
        })
    });
}

fn seed_batch(c: &mut Criterion) {
    let home = bench_team("Home", 70);
    let away = bench_team("Away", 45);
    let seeds: Vec<u64> = (0..256).collect();
    c.bench_function("simulate_batch_256_seeds", |b| {
        b.iter(|| simulate_batch(black_box(&home), black_box(&away), MatchConfig::default(), &seeds).unwrap())
    });
}

criterion_group!(benches, full_match, seed_batch);
criterion_main!(benches);
