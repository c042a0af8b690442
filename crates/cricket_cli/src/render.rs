//! Console formatting for registry records.

use cricket_core::{Match, Player, Registry, Team, ROSTER_LIMIT};

pub const BANNER: &str = "==================================================";

fn fmt_rate(rate: Option<f64>) -> String {
    match rate {
        Some(value) => format!("{:.2}", value),
        None => "N/A".to_string(),
    }
}

/// Resolve a team id to its name, falling back to the raw id.
pub fn team_name<'a>(registry: &'a Registry, team_id: &'a str) -> &'a str {
    registry
        .get_team(team_id)
        .map(|t| t.name.as_str())
        .unwrap_or(team_id)
}

pub fn print_main_menu() {
    println!("\n{}", BANNER);
    println!("      CRICKET SIMULATION GAME");
    println!("{}", BANNER);
    println!("1. Player Management");
    println!("2. Team Management");
    println!("3. Match Management");
    println!("4. Simulate Match");
    println!("5. View Statistics");
    println!("6. Exit");
}

pub fn print_player_row(index: usize, player: &Player) {
    println!(
        "{:2}. {} ({}) - {} runs, {} wickets",
        index + 1,
        player.name,
        player.role.abbreviation(),
        player.batting.runs,
        player.bowling.wickets
    );
}

pub fn print_bowling_option_row(index: usize, player: &Player) {
    println!(
        "{:2}. {} ({}) - {}, average {}",
        index + 1,
        player.name,
        player.role.abbreviation(),
        player.bowling.overs_display(),
        fmt_rate(player.bowling.average())
    );
}

pub fn print_player_summary(player: &Player) {
    println!("\n{}", BANNER);
    println!("{} ({})", player.name, player.role.display_name());
    println!("{}", BANNER);

    let batting = &player.batting;
    println!("Batting");
    println!("   Matches:       {}", batting.matches);
    println!("   Innings:       {} ({} not out)", batting.innings, batting.not_outs);
    println!("   Runs:          {}", batting.runs);
    println!("   Highest score: {}", batting.highest_score);
    println!("   Average:       {}", fmt_rate(batting.average()));
    println!("   Strike rate:   {}", fmt_rate(batting.strike_rate()));
    println!("   Boundaries:    {} fours, {} sixes", batting.fours, batting.sixes);
    println!("   Milestones:    {} fifties, {} hundreds", batting.half_centuries, batting.centuries);

    let bowling = &player.bowling;
    println!("Bowling");
    println!("   Overs:         {}", bowling.overs_display());
    println!("   Maidens:       {}", bowling.maidens);
    println!("   Runs conceded: {}", bowling.runs_conceded);
    println!("   Wickets:       {} ({} five-fors)", bowling.wickets, bowling.five_wicket_hauls);
    println!("   Average:       {}", fmt_rate(bowling.average()));
    println!("   Economy:       {}", fmt_rate(bowling.economy()));
    println!("   Strike rate:   {}", fmt_rate(bowling.strike_rate()));

    let fielding = &player.fielding;
    println!("Fielding");
    println!(
        "   Catches: {}   Stumpings: {}   Run-outs: {}",
        fielding.catches, fielding.stumpings, fielding.run_outs
    );
}

pub fn print_team_row(index: usize, team: &Team) {
    println!("{:2}. {} - {} players", index + 1, team.name, team.roster().len());
}

pub fn print_team_summary(registry: &Registry, team: &Team) {
    println!("\n{}", BANNER);
    println!("{}", team.name);
    println!("{}", BANNER);

    let captain = team
        .captain()
        .and_then(|id| registry.get_player(id).ok())
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "TBD".to_string());
    println!("Captain:    {}", captain);
    println!("Squad size: {}/{}", team.roster().len(), ROSTER_LIMIT);

    if let Ok(players) = registry.team_players(&team.id) {
        if players.is_empty() {
            println!("   (no players signed)");
        }
        for player in players {
            let marker = if team.captain() == Some(player.id.as_str()) { " (c)" } else { "" };
            println!("   - {}{} ({})", player.name, marker, player.role.display_name());
        }
    }
}

pub fn print_match_row(registry: &Registry, index: usize, m: &Match) {
    println!(
        "{:2}. {} vs {} ({}, {})",
        index + 1,
        team_name(registry, m.team_a()),
        team_name(registry, m.team_b()),
        m.format.abbreviation(),
        m.status().display_name()
    );
}

pub fn print_match_summary(registry: &Registry, m: &Match) {
    println!("\n{}", BANNER);
    println!("{} vs {}", team_name(registry, m.team_a()), team_name(registry, m.team_b()));
    println!("{}", BANNER);
    println!("Format:  {} (max {} overs)", m.format.display_name(), m.max_overs());
    println!("Venue:   {}", m.venue);
    println!("Date:    {}", m.scheduled_for.format("%Y-%m-%d"));
    println!("Status:  {}", m.status().display_name());

    if let Some(toss) = m.toss() {
        println!(
            "Toss:    {} won the toss and elected to {}",
            team_name(registry, &toss.winner),
            toss.decision.display_name()
        );
    }
    if let Some(outcome) = m.outcome() {
        println!("Result:  {}", outcome.summary);
    }
}
