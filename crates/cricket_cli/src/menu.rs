//! Interactive menu loop.
//!
//! Registry failures are printed and the menu continues; only I/O errors
//! propagate. Ctrl-D cancels the current flow, or exits from the main menu.

use anyhow::Result;
use cricket_core::{MatchFormat, MatchStatus, PlayerRole, Registry, StatDelta, TossDecision};

use crate::input;
use crate::render;

pub fn run(registry: &mut Registry) -> Result<()> {
    loop {
        render::print_main_menu();
        let choice = match input::prompt("\nEnter your choice: ")? {
            Some(choice) => choice,
            None => break,
        };
        match choice.as_str() {
            "1" => player_menu(registry)?,
            "2" => team_menu(registry)?,
            "3" => match_menu(registry)?,
            "4" => simulate_match()?,
            "5" => statistics_menu(registry)?,
            "6" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

/// Numbered-list picker. `None` means cancelled (zero or Ctrl-D).
fn choose_index(count: usize, label: &str) -> Result<Option<usize>> {
    loop {
        let value = match input::prompt_u32(label)? {
            Some(value) => value,
            None => return Ok(None),
        };
        if value == 0 {
            return Ok(None);
        }
        let index = value as usize - 1;
        if index < count {
            return Ok(Some(index));
        }
        println!("Invalid choice. Please try again.");
    }
}

// ========================
// Player Management
// ========================

fn player_menu(registry: &mut Registry) -> Result<()> {
    loop {
        println!("\n--- Player Management ---");
        println!("1. Create Player");
        println!("2. List Players");
        println!("3. View Player Details");
        println!("4. Record Performance");
        println!("5. Back");
        let choice = match input::prompt("\nEnter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };
        match choice.as_str() {
            "1" => create_player(registry)?,
            "2" => list_players(registry)?,
            "3" => view_player(registry)?,
            "4" => record_performance(registry)?,
            "5" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn create_player(registry: &mut Registry) -> Result<()> {
    let Some(name) = input::prompt("Enter player name: ")? else { return Ok(()) };

    println!("Roles: batsman, bowler, all-rounder, wicket-keeper");
    let role = loop {
        let Some(raw) = input::prompt("Enter role: ")? else { return Ok(()) };
        match raw.parse::<PlayerRole>() {
            Ok(role) => break role,
            Err(message) => println!("{}", message),
        }
    };

    match registry.create_player(&name, role) {
        Ok(player) => println!("✓ Player '{}' created successfully!", player.name),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn list_players(registry: &Registry) -> Result<()> {
    if registry.players().is_empty() {
        println!("No players found. Create some players first!");
        return Ok(());
    }
    println!();
    for (index, player) in registry.players().iter().enumerate() {
        render::print_player_row(index, player);
    }
    Ok(())
}

fn choose_player(registry: &Registry) -> Result<Option<String>> {
    if registry.players().is_empty() {
        println!("No players found. Create some players first!");
        return Ok(None);
    }
    println!();
    for (index, player) in registry.players().iter().enumerate() {
        render::print_player_row(index, player);
    }
    let Some(index) = choose_index(registry.players().len(), "Select a player (0 to cancel): ")?
    else {
        return Ok(None);
    };
    Ok(Some(registry.players()[index].id.clone()))
}

fn view_player(registry: &Registry) -> Result<()> {
    let Some(player_id) = choose_player(registry)? else { return Ok(()) };
    match registry.get_player(&player_id) {
        Ok(player) => render::print_player_summary(player),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

/// Record one performance. Milestones (fifties, hundreds, five-fors) and
/// the innings count are derived from the figures.
fn record_performance(registry: &mut Registry) -> Result<()> {
    let Some(player_id) = choose_player(registry)? else { return Ok(()) };

    println!("Enter the match figures. Blank means zero; negatives back out a mistake.");
    let Some(runs) = input::prompt_i32_or_zero("  Runs scored: ")? else { return Ok(()) };
    let Some(balls_faced) = input::prompt_i32_or_zero("  Balls faced: ")? else { return Ok(()) };
    let Some(fours) = input::prompt_i32_or_zero("  Fours: ")? else { return Ok(()) };
    let Some(sixes) = input::prompt_i32_or_zero("  Sixes: ")? else { return Ok(()) };
    let Some(dismissed) = input::prompt_yes_no("  Was the player dismissed? (y/n): ")? else {
        return Ok(());
    };
    let Some(balls_bowled) = input::prompt_i32_or_zero("  Balls bowled: ")? else { return Ok(()) };
    let Some(maidens) = input::prompt_i32_or_zero("  Maidens: ")? else { return Ok(()) };
    let Some(runs_conceded) = input::prompt_i32_or_zero("  Runs conceded: ")? else {
        return Ok(());
    };
    let Some(wickets) = input::prompt_i32_or_zero("  Wickets: ")? else { return Ok(()) };
    let Some(catches) = input::prompt_i32_or_zero("  Catches: ")? else { return Ok(()) };
    let Some(stumpings) = input::prompt_i32_or_zero("  Stumpings: ")? else { return Ok(()) };
    let Some(run_outs) = input::prompt_i32_or_zero("  Run-outs: ")? else { return Ok(()) };

    let batted = runs != 0 || balls_faced != 0 || dismissed;
    let delta = StatDelta {
        matches: 1,
        innings: if batted { 1 } else { 0 },
        not_outs: if batted && !dismissed { 1 } else { 0 },
        runs,
        balls_faced,
        highest_score: if runs > 0 { Some(runs as u32) } else { None },
        fours,
        sixes,
        half_centuries: if (50..100).contains(&runs) { 1 } else { 0 },
        centuries: if runs >= 100 { 1 } else { 0 },
        balls_bowled,
        maidens,
        runs_conceded,
        wickets,
        five_wicket_hauls: if wickets >= 5 { 1 } else { 0 },
        catches,
        stumpings,
        run_outs,
    };

    match registry.update_stats(&player_id, &delta) {
        Ok(player) => {
            println!("✓ Statistics updated for '{}'!", player.name);
            render::print_player_summary(&player);
        }
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

// ========================
// Team Management
// ========================

fn team_menu(registry: &mut Registry) -> Result<()> {
    loop {
        println!("\n--- Team Management ---");
        println!("1. Create Team");
        println!("2. List Teams");
        println!("3. View Team Details");
        println!("4. Add Player to Team");
        println!("5. Remove Player from Team");
        println!("6. Appoint Captain");
        println!("7. Rename Team");
        println!("8. Suggested Batting Order");
        println!("9. Bowling Options");
        println!("10. Back");
        let choice = match input::prompt("\nEnter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };
        match choice.as_str() {
            "1" => create_team(registry)?,
            "2" => list_teams(registry)?,
            "3" => view_team(registry)?,
            "4" => add_player_to_team(registry)?,
            "5" => remove_player_from_team(registry)?,
            "6" => appoint_captain(registry)?,
            "7" => rename_team(registry)?,
            "8" => show_batting_order(registry)?,
            "9" => show_bowling_options(registry)?,
            "10" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn create_team(registry: &mut Registry) -> Result<()> {
    let Some(name) = input::prompt("Enter team name: ")? else { return Ok(()) };
    match registry.create_team(&name) {
        Ok(team) => println!("✓ Team '{}' created successfully!", team.name),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn list_teams(registry: &Registry) -> Result<()> {
    if registry.teams().is_empty() {
        println!("No teams found. Create some teams first!");
        return Ok(());
    }
    println!();
    for (index, team) in registry.teams().iter().enumerate() {
        render::print_team_row(index, team);
    }
    Ok(())
}

fn choose_team(registry: &Registry) -> Result<Option<String>> {
    if registry.teams().is_empty() {
        println!("No teams found. Create some teams first!");
        return Ok(None);
    }
    println!();
    for (index, team) in registry.teams().iter().enumerate() {
        render::print_team_row(index, team);
    }
    let Some(index) = choose_index(registry.teams().len(), "Select a team (0 to cancel): ")? else {
        return Ok(None);
    };
    Ok(Some(registry.teams()[index].id.clone()))
}

/// Pick a player from a team's roster rather than the whole registry.
fn choose_roster_member(registry: &Registry, team_id: &str) -> Result<Option<String>> {
    let players = match registry.team_players(team_id) {
        Ok(players) => players,
        Err(err) => {
            println!("✗ {}", err);
            return Ok(None);
        }
    };
    if players.is_empty() {
        println!("The roster is empty.");
        return Ok(None);
    }
    println!();
    for (index, player) in players.iter().enumerate() {
        render::print_player_row(index, player);
    }
    let ids: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
    let Some(index) = choose_index(ids.len(), "Select a player (0 to cancel): ")? else {
        return Ok(None);
    };
    Ok(Some(ids[index].clone()))
}

fn view_team(registry: &Registry) -> Result<()> {
    let Some(team_id) = choose_team(registry)? else { return Ok(()) };
    match registry.get_team(&team_id) {
        Ok(team) => render::print_team_summary(registry, team),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn add_player_to_team(registry: &mut Registry) -> Result<()> {
    let Some(team_id) = choose_team(registry)? else { return Ok(()) };
    let Some(player_id) = choose_player(registry)? else { return Ok(()) };

    let team_label = render::team_name(registry, &team_id).to_string();
    match registry.add_player_to_team(&team_id, &player_id) {
        Ok(()) => println!("✓ Player added to '{}'!", team_label),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn remove_player_from_team(registry: &mut Registry) -> Result<()> {
    let Some(team_id) = choose_team(registry)? else { return Ok(()) };
    let Some(player_id) = choose_roster_member(registry, &team_id)? else { return Ok(()) };

    match registry.remove_player_from_team(&team_id, &player_id) {
        Ok(()) => println!("✓ Player removed from the roster!"),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn appoint_captain(registry: &mut Registry) -> Result<()> {
    let Some(team_id) = choose_team(registry)? else { return Ok(()) };
    let Some(player_id) = choose_roster_member(registry, &team_id)? else { return Ok(()) };

    let team_label = render::team_name(registry, &team_id).to_string();
    match registry.set_team_captain(&team_id, &player_id) {
        Ok(()) => println!("✓ New captain appointed for '{}'!", team_label),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn rename_team(registry: &mut Registry) -> Result<()> {
    let Some(team_id) = choose_team(registry)? else { return Ok(()) };
    let Some(new_name) = input::prompt("Enter the new name: ")? else { return Ok(()) };

    match registry.rename_team(&team_id, &new_name) {
        Ok(()) => println!("✓ Team renamed!"),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn show_batting_order(registry: &Registry) -> Result<()> {
    let Some(team_id) = choose_team(registry)? else { return Ok(()) };
    match registry.batting_order(&team_id) {
        Ok(order) if order.is_empty() => println!("The roster is empty."),
        Ok(order) => {
            println!("\nSuggested batting order:");
            for (index, player) in order.iter().enumerate() {
                println!("{:2}. {} ({})", index + 1, player.name, player.role.abbreviation());
            }
        }
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn show_bowling_options(registry: &Registry) -> Result<()> {
    let Some(team_id) = choose_team(registry)? else { return Ok(()) };
    match registry.bowling_options(&team_id) {
        Ok(options) if options.is_empty() => println!("No bowling options on this roster."),
        Ok(options) => {
            println!("\nBowling options (best average first):");
            for (index, player) in options.iter().enumerate() {
                render::print_bowling_option_row(index, player);
            }
        }
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

// ========================
// Match Management
// ========================

fn match_menu(registry: &mut Registry) -> Result<()> {
    loop {
        println!("\n--- Match Management ---");
        println!("1. Schedule Match");
        println!("2. List Matches");
        println!("3. View Match Details");
        println!("4. Record Toss");
        println!("5. Update Match Status");
        println!("6. Record Match Result");
        println!("7. Back");
        let choice = match input::prompt("\nEnter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };
        match choice.as_str() {
            "1" => schedule_match(registry)?,
            "2" => list_matches(registry)?,
            "3" => view_match(registry)?,
            "4" => record_toss(registry)?,
            "5" => update_match_status(registry)?,
            "6" => record_match_result(registry)?,
            "7" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn schedule_match(registry: &mut Registry) -> Result<()> {
    println!("Home team:");
    let Some(team_a) = choose_team(registry)? else { return Ok(()) };
    println!("Away team:");
    let Some(team_b) = choose_team(registry)? else { return Ok(()) };

    println!("Formats: t20, odi, test");
    let format = loop {
        let Some(raw) = input::prompt("Enter format: ")? else { return Ok(()) };
        match raw.parse::<MatchFormat>() {
            Ok(format) => break format,
            Err(message) => println!("{}", message),
        }
    };

    let venue = match input::prompt("Enter venue (blank for TBD): ")? {
        Some(venue) if venue.is_empty() => None,
        Some(venue) => Some(venue),
        None => return Ok(()),
    };

    match registry.create_match(&team_a, &team_b, format, venue) {
        Ok(m) => println!(
            "✓ Match scheduled: {} vs {}!",
            render::team_name(registry, m.team_a()),
            render::team_name(registry, m.team_b())
        ),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn list_matches(registry: &Registry) -> Result<()> {
    if registry.matches().is_empty() {
        println!("No matches found. Schedule one first!");
        return Ok(());
    }
    println!();
    for (index, m) in registry.matches().iter().enumerate() {
        render::print_match_row(registry, index, m);
    }
    Ok(())
}

fn choose_match(registry: &Registry) -> Result<Option<String>> {
    if registry.matches().is_empty() {
        println!("No matches found. Schedule one first!");
        return Ok(None);
    }
    println!();
    for (index, m) in registry.matches().iter().enumerate() {
        render::print_match_row(registry, index, m);
    }
    let Some(index) = choose_index(registry.matches().len(), "Select a match (0 to cancel): ")?
    else {
        return Ok(None);
    };
    Ok(Some(registry.matches()[index].id.clone()))
}

fn view_match(registry: &Registry) -> Result<()> {
    let Some(match_id) = choose_match(registry)? else { return Ok(()) };
    match registry.get_match(&match_id) {
        Ok(m) => render::print_match_summary(registry, m),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

/// The two competing teams of a match, for winner pickers.
fn match_teams(registry: &Registry, match_id: &str) -> Option<(String, String)> {
    match registry.get_match(match_id) {
        Ok(m) => Some((m.team_a().to_string(), m.team_b().to_string())),
        Err(err) => {
            println!("✗ {}", err);
            None
        }
    }
}

fn record_toss(registry: &mut Registry) -> Result<()> {
    let Some(match_id) = choose_match(registry)? else { return Ok(()) };
    let Some((team_a, team_b)) = match_teams(registry, &match_id) else { return Ok(()) };

    println!("1. {}", render::team_name(registry, &team_a));
    println!("2. {}", render::team_name(registry, &team_b));
    let Some(index) = choose_index(2, "Who won the toss? (0 to cancel): ")? else {
        return Ok(());
    };
    let winner = if index == 0 { team_a } else { team_b };

    println!("Decisions: bat, field");
    let decision = loop {
        let Some(raw) = input::prompt("Enter decision: ")? else { return Ok(()) };
        match raw.parse::<TossDecision>() {
            Ok(decision) => break decision,
            Err(message) => println!("{}", message),
        }
    };

    match registry.record_toss(&match_id, &winner, decision) {
        Ok(()) => println!("✓ Toss recorded!"),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn update_match_status(registry: &mut Registry) -> Result<()> {
    let Some(match_id) = choose_match(registry)? else { return Ok(()) };

    println!("Statuses: scheduled, in-progress, completed");
    let status = loop {
        let Some(raw) = input::prompt("Enter status: ")? else { return Ok(()) };
        match raw.parse::<MatchStatus>() {
            Ok(status) => break status,
            Err(message) => println!("{}", message),
        }
    };

    match registry.set_match_status(&match_id, status) {
        Ok(()) => println!("✓ Match is now {}!", status.display_name()),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

fn record_match_result(registry: &mut Registry) -> Result<()> {
    let Some(match_id) = choose_match(registry)? else { return Ok(()) };
    let Some((team_a, team_b)) = match_teams(registry, &match_id) else { return Ok(()) };

    println!("1. {}", render::team_name(registry, &team_a));
    println!("2. {}", render::team_name(registry, &team_b));
    println!("3. Draw or tie (no winner)");
    let Some(index) = choose_index(3, "Select the winner (0 to cancel): ")? else {
        return Ok(());
    };
    let winner = match index {
        0 => Some(team_a),
        1 => Some(team_b),
        _ => None,
    };

    let Some(summary) = input::prompt("Enter a one-line summary: ")? else { return Ok(()) };

    match registry.record_match_result(&match_id, winner.as_deref(), &summary) {
        Ok(()) => println!("✓ Result recorded!"),
        Err(err) => println!("✗ {}", err),
    }
    Ok(())
}

// ========================
// Statistics
// ========================

fn statistics_menu(registry: &mut Registry) -> Result<()> {
    loop {
        println!("\n--- View Statistics ---");
        println!("1. Player Summary");
        println!("2. Team Summary");
        println!("3. Back");
        let choice = match input::prompt("\nEnter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };
        match choice.as_str() {
            "1" => view_player(registry)?,
            "2" => view_team(registry)?,
            "3" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn simulate_match() -> Result<()> {
    println!("\nMatch simulation is coming soon!");
    let _ = input::prompt("Press Enter to continue...")?;
    Ok(())
}
