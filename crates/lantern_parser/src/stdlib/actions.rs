//! Handlers and preconditions for the standard actions.
//!
//! Handlers assume [`Command::verify`] has run: thing arguments exist,
//! carried parameters are carried, and the precondition passed.

use lantern_foundation::EntityId;
use lantern_world::{Direction, Exit, ThingFlags, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::{ActionContext, ActionError, ActionResult, Induction};
use crate::argument::ThingSource;
use crate::command::Command;
use crate::value::Effort;

type Outcome = Result<ActionResult, ActionError>;

/// Ticks `wait` lets pass.
pub const WAIT_TICKS: u64 = 3;

/// Upper bound for `rest`.
pub const MAX_REST: i64 = 100;

/// Damage range for a bare-handed blow.
const FIST_DAMAGE: u32 = 2;

// =============================================================================
// Helpers
// =============================================================================

fn arg(cmd: &Command, index: usize) -> Result<EntityId, ActionError> {
    cmd.thing(index)
        .ok_or_else(|| ActionError::precondition("You need to say what."))
}

fn name(world: &World, id: EntityId) -> String {
    world.describe(id)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins names as "a, b and c".
fn list(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

fn describe_place(world: &World, actor: EntityId) -> Result<String, ActionError> {
    let place = world
        .location_of(actor)
        .ok_or_else(|| ActionError::precondition("You are nowhere at all."))?;
    if !world.has_light(place) {
        return Ok("It is pitch dark. You can't see a thing.".to_owned());
    }

    let data = world.get(place)?;
    let mut lines = vec![capitalize(&data.name)];
    if let Some(description) = &data.description {
        lines.push(description.clone());
    }

    let visible: Vec<String> = ThingSource::Surroundings
        .candidates(world, actor)
        .into_iter()
        .map(|id| name(world, id))
        .collect();
    if !visible.is_empty() {
        lines.push(format!("You see {} here.", list(&visible)));
    }

    let exits: Vec<String> = world
        .exits(place)
        .map(|exit| match exit.controller {
            Some(portal) if !world.is_passable(exit) => {
                format!("{} (through the closed {})", exit.direction, name(world, portal))
            }
            _ => exit.direction.to_string(),
        })
        .collect();
    if !exits.is_empty() {
        lines.push(format!("Exits: {}.", list(&exits)));
    }
    Ok(lines.join("\n"))
}

fn contents_line(world: &World, container: EntityId) -> String {
    let inside: Vec<String> = world
        .contents(container)
        .filter(|id| world.is_perceivable(*id))
        .map(|id| name(world, id))
        .collect();
    if inside.is_empty() {
        format!("The {} is empty.", name(world, container))
    } else {
        format!("The {} contains {}.", name(world, container), list(&inside))
    }
}

// =============================================================================
// Looking
// =============================================================================

/// Describes the actor's surroundings.
///
/// # Errors
///
/// Fails if the actor is not in any place.
pub fn look(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    describe_place(&ctx.world, cmd.actor()).map(ActionResult::describe)
}

/// Describes one thing.
///
/// # Errors
///
/// Fails if the thing has vanished.
pub fn examine(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let world = &ctx.world;
    let thing = arg(cmd, 0)?;
    let data = world.get(thing)?;
    let mut result = ActionResult::describe(data.description.clone().unwrap_or_else(|| {
        format!("You see nothing special about the {}.", data.describe())
    }));
    if let Some(damage) = data.damage {
        result = result.and_describe(format!(
            "It deals up to {} {} damage.",
            damage.amount, damage.kind
        ));
    }
    if world.shows_contents(thing) {
        result = result.and_describe(contents_line(world, thing));
    }
    Ok(result)
}

/// Lists what the actor carries.
///
/// # Errors
///
/// Never fails.
pub fn inventory(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let carried: Vec<String> = ThingSource::Inventory
        .candidates(&ctx.world, cmd.actor())
        .into_iter()
        .map(|id| name(&ctx.world, id))
        .collect();
    Ok(ActionResult::describe(if carried.is_empty() {
        "You are empty-handed.".to_owned()
    } else {
        format!("You are carrying {}.", list(&carried))
    }))
}

/// Lists carried things passing a filter.
///
/// # Errors
///
/// Fails if the filter argument is missing.
pub fn inventory_filtered(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let filter = cmd
        .filter(0)
        .ok_or_else(|| ActionError::precondition("Filter by what?"))?;
    let matching: Vec<String> = ThingSource::Inventory
        .candidates(&ctx.world, cmd.actor())
        .into_iter()
        .filter(|id| filter.matches(&ctx.world, *id))
        .map(|id| name(&ctx.world, id))
        .collect();
    Ok(ActionResult::describe(if matching.is_empty() {
        format!("You have no {filter}.")
    } else {
        format!("Your {filter}: {}.", list(&matching))
    }))
}

// =============================================================================
// Taking and dropping
// =============================================================================

/// Refuses to take what is carried, fixed in place, or the actor.
///
/// # Errors
///
/// Returns a player-facing refusal.
pub fn can_take(world: &World, cmd: &Command) -> Result<(), ActionError> {
    let thing = arg(cmd, 0)?;
    if world.carries(cmd.actor(), thing) {
        return Err(ActionError::precondition(format!(
            "You already have the {}.",
            name(world, thing)
        )));
    }
    if !world.has_flag(thing, ThingFlags::PORTABLE) {
        return Err(ActionError::precondition(format!(
            "The {} won't budge.",
            name(world, thing)
        )));
    }
    Ok(())
}

/// Moves a thing into the actor's inventory.
///
/// # Errors
///
/// Fails if the world rejects the move.
pub fn take(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let thing = arg(cmd, 0)?;
    ctx.world = ctx.world.move_to(thing, cmd.actor())?;
    Ok(ActionResult::describe("Taken."))
}

/// Puts a carried thing down where the actor stands.
///
/// # Errors
///
/// Fails if the actor is nowhere.
pub fn drop(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let thing = arg(cmd, 0)?;
    let floor = ctx
        .world
        .parent(cmd.actor())
        .ok_or_else(|| ActionError::precondition("There is nowhere to put it."))?;
    ctx.world = ctx.world.move_to(thing, floor)?;
    Ok(ActionResult::describe("Dropped."))
}

// =============================================================================
// Opening and closing
// =============================================================================

/// Refuses to open what is open or locked.
///
/// # Errors
///
/// Returns a player-facing refusal.
pub fn can_open(world: &World, cmd: &Command) -> Result<(), ActionError> {
    let thing = arg(cmd, 0)?;
    if world.has_flag(thing, ThingFlags::OPEN) {
        return Err(ActionError::precondition(format!(
            "The {} is already open.",
            name(world, thing)
        )));
    }
    if world.has_flag(thing, ThingFlags::LOCKED) {
        return Err(ActionError::precondition(format!(
            "The {} is locked.",
            name(world, thing)
        )));
    }
    Ok(())
}

/// Opens a container or other openable thing.
///
/// # Errors
///
/// Fails if the world rejects the update.
pub fn open(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let thing = arg(cmd, 0)?;
    ctx.world = ctx.world.set_flag(thing, ThingFlags::OPEN, true)?;
    let mut result = ActionResult::describe(format!("You open the {}.", name(&ctx.world, thing)));
    if ctx.world.shows_contents(thing) {
        result = result.and_describe(contents_line(&ctx.world, thing));
    }
    Ok(result)
}

/// Opens a door or hatch, naming where it leads.
///
/// # Errors
///
/// Fails if the world rejects the update.
pub fn open_portal(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let portal = arg(cmd, 0)?;
    ctx.world = ctx.world.set_flag(portal, ThingFlags::OPEN, true)?;
    let world = &ctx.world;
    let leads = world
        .location_of(cmd.actor())
        .and_then(|place| world.exits(place).find(|exit| exit.controller == Some(portal)))
        .map(|exit| exit.direction);
    Ok(ActionResult::describe(match leads {
        Some(direction) => format!(
            "You open the {}, revealing a way {direction}.",
            name(world, portal)
        ),
        None => format!("You open the {}.", name(world, portal)),
    }))
}

/// Refuses to close what is already closed.
///
/// # Errors
///
/// Returns a player-facing refusal.
pub fn can_close(world: &World, cmd: &Command) -> Result<(), ActionError> {
    let thing = arg(cmd, 0)?;
    if world.has_flag(thing, ThingFlags::OPEN) {
        Ok(())
    } else {
        Err(ActionError::precondition(format!(
            "The {} is already closed.",
            name(world, thing)
        )))
    }
}

/// Closes an openable thing.
///
/// # Errors
///
/// Fails if the world rejects the update.
pub fn close(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let thing = arg(cmd, 0)?;
    ctx.world = ctx.world.set_flag(thing, ThingFlags::OPEN, false)?;
    Ok(ActionResult::describe(format!(
        "You close the {}.",
        name(&ctx.world, thing)
    )))
}

// =============================================================================
// Movement
// =============================================================================

fn exit_for(world: &World, cmd: &Command) -> Result<Exit, ActionError> {
    let direction: Direction = cmd
        .constant(0)
        .ok_or_else(|| ActionError::precondition("Go where?"))?;
    world
        .location_of(cmd.actor())
        .and_then(|place| world.exit_towards(place, direction))
        .ok_or_else(|| ActionError::precondition("You can't go that way."))
}

/// Refuses missing and blocked exits.
///
/// # Errors
///
/// Returns a player-facing refusal.
pub fn can_go(world: &World, cmd: &Command) -> Result<(), ActionError> {
    let exit = exit_for(world, cmd)?;
    match exit.controller {
        Some(portal) if !world.is_passable(&exit) => Err(ActionError::precondition(format!(
            "The {} is closed.",
            name(world, portal)
        ))),
        _ => Ok(()),
    }
}

/// Walks through an exit and looks around.
///
/// # Errors
///
/// Fails if the exit vanished or the move is rejected.
pub fn go(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let exit = exit_for(&ctx.world, cmd)?;
    ctx.world = ctx.world.move_to(cmd.actor(), exit.destination)?;
    Ok(ActionResult::describe(describe_place(&ctx.world, cmd.actor())?))
}

// =============================================================================
// Comparing
// =============================================================================

/// Compares two things.
///
/// # Errors
///
/// Fails if either thing has vanished.
pub fn compare(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let (first, second) = (arg(cmd, 0)?, arg(cmd, 1)?);
    let world = &ctx.world;
    if first == second {
        return Ok(ActionResult::describe(format!(
            "The {} is exactly as good as itself.",
            name(world, first)
        )));
    }
    let strength = |id| world.get(id).ok().and_then(|d| d.damage).map_or(0, |d| d.amount);
    let (a, b) = (strength(first), strength(second));
    let text = match a.cmp(&b) {
        std::cmp::Ordering::Greater => {
            format!("The {} hits harder.", name(world, first))
        }
        std::cmp::Ordering::Less => {
            format!("The {} hits harder.", name(world, second))
        }
        std::cmp::Ordering::Equal => format!(
            "You see no meaningful difference between the {} and the {}.",
            name(world, first),
            name(world, second)
        ),
    };
    Ok(ActionResult::describe(text))
}

// =============================================================================
// Fighting
// =============================================================================

/// Refuses to hit the dead or oneself.
///
/// # Errors
///
/// Returns a player-facing refusal.
pub fn can_hit(world: &World, cmd: &Command) -> Result<(), ActionError> {
    let target = arg(cmd, 0)?;
    if target == cmd.actor() {
        return Err(ActionError::precondition("You think better of it."));
    }
    if !world.get(target)?.is_alive() {
        return Err(ActionError::precondition(format!(
            "The {} is already dead.",
            name(world, target)
        )));
    }
    Ok(())
}

/// Rolls damage for a blow.
///
/// The roll is seeded from the world so replaying a command replays its
/// outcome.
fn roll(world: &World, target: EntityId, max: u32, effort: Effort) -> u32 {
    let seed = world.seed() ^ world.tick().rotate_left(17) ^ u64::from(target.index);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let base = rng.gen_range(1..=max.max(1));
    match effort {
        Effort::Normal | Effort::Quick => base,
        Effort::Careful => base.div_ceil(2),
        Effort::Forceful => base + 1,
    }
}

fn strike(ctx: &mut ActionContext, target: EntityId, max: u32, effort: Effort) -> Outcome {
    let amount = roll(&ctx.world, target, max, effort);
    let dealt = i32::try_from(amount).unwrap_or(i32::MAX);
    ctx.world = ctx.world.update(target, |data| {
        if let Some(health) = data.health.as_mut() {
            *health = health.saturating_sub(dealt);
        }
    })?;
    let target_name = name(&ctx.world, target);
    let mut result = ActionResult::describe(format!("You hit the {target_name} for {amount}."));
    if !ctx.world.get(target)?.is_alive() {
        result = result.and_describe(format!("The {target_name} collapses."));
    }
    Ok(result)
}

/// Hits a creature bare-handed.
///
/// # Errors
///
/// Fails if the target vanished.
pub fn hit(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let target = arg(cmd, 0)?;
    strike(ctx, target, FIST_DAMAGE, cmd.effort())
}

/// Hits a creature with a carried weapon.
///
/// # Errors
///
/// Fails if the target or weapon vanished.
pub fn hit_with(ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let target = arg(cmd, 0)?;
    let weapon = arg(cmd, 2)?;
    let max = ctx
        .world
        .get(weapon)?
        .damage
        .map_or(FIST_DAMAGE, |damage| damage.amount);
    strike(ctx, target, max, cmd.effort())
}

// =============================================================================
// Passing time
// =============================================================================

/// Lets a few ticks pass.
///
/// # Errors
///
/// Never fails.
pub fn wait(_ctx: &mut ActionContext, _cmd: &Command) -> Outcome {
    Ok(ActionResult::describe("You settle in to wait.").with_induction(Induction::after(
        WAIT_TICKS,
        |_| Ok(ActionResult::describe("Time passes.")),
    )))
}

/// Refuses silly rest lengths.
///
/// # Errors
///
/// Returns a player-facing refusal.
pub fn can_rest(_world: &World, cmd: &Command) -> Result<(), ActionError> {
    match cmd.number(0) {
        Some(n) if (1..=MAX_REST).contains(&n) => Ok(()),
        _ => Err(ActionError::precondition(format!(
            "You can rest between 1 and {MAX_REST} ticks at a time."
        ))),
    }
}

/// Rests, recovering one point of health every `n` ticks until interrupted.
///
/// # Errors
///
/// Never fails once the precondition passed.
pub fn rest(_ctx: &mut ActionContext, cmd: &Command) -> Outcome {
    let actor = cmd.actor();
    let period = cmd.number(0).and_then(|n| u64::try_from(n).ok()).unwrap_or(1);
    Ok(ActionResult::describe("You lie down to rest.").with_induction(Induction::every(
        period,
        move |ctx| {
            ctx.world = ctx.world.update(actor, |data| {
                if let Some(health) = data.health.as_mut() {
                    *health = health.saturating_add(1);
                }
            })?;
            Ok(ActionResult::describe("You feel a little more rested."))
        },
    )))
}
