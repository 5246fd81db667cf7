//! Event descriptors
//!
//! Plain-value descriptions of game events, produced by the host engine and
//! consumed by [`ActionLogger::record`](crate::ActionLogger::record). The host
//! extracts names, kinds, and coordinates from its live world objects; nothing
//! in this module touches engine state.

/// Integer block coordinates inside one world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// An enchantment applied to an item, e.g. `sharpness` level 5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enchantment {
    pub name: String,
    pub level: u32,
}

/// An item involved in a container interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    /// Upper-case material name, e.g. `DIAMOND_SWORD`
    pub name: String,
    pub amount: u32,
    pub enchantments: Vec<Enchantment>,
}

impl ItemStack {
    pub fn new(name: impl Into<String>, amount: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            enchantments: Vec::new(),
        }
    }

    pub fn with_enchantments(mut self, enchantments: Vec<Enchantment>) -> Self {
        self.enchantments = enchantments;
        self
    }

    /// True for empty slots and air stacks, which are never worth recording
    pub fn is_empty(&self) -> bool {
        self.amount == 0 || self.name == "AIR"
    }

    /// Subject label for the log line: the material name, with an
    /// `{ench:lvl,ench:lvl}` suffix when the item is enchanted.
    ///
    /// Enchantment separators are commas, so an enchanted label embedded in a
    /// comma-separated line cannot be split back naively. Known limitation of
    /// the format.
    pub fn label(&self) -> String {
        if self.enchantments.is_empty() {
            return self.name.clone();
        }
        let suffix: Vec<String> = self
            .enchantments
            .iter()
            .map(|e| format!("{}:{}", e.name, e.level))
            .collect();
        format!("{}{{{}}}", self.name, suffix.join(","))
    }
}

/// How a container slot was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// Cursor pickup (including pickup-half, pickup-all variants)
    Pickup,

    /// Shift-click quick move out of the container
    ShiftMove,

    /// Anything else (placements, drags, number-key swaps, ...)
    Other,
}

impl ClickKind {
    /// Only pickups and shift-moves remove items in a way worth auditing
    pub fn takes_items(self) -> bool {
        matches!(self, ClickKind::Pickup | ClickKind::ShiftMove)
    }
}

/// A discrete game event, one variant per recordable kind
///
/// `world` is the dimension name (e.g. `world`, `world_nether`). Container
/// variants carry `Option<Position>` because virtual inventories (crafting
/// views, ender chests opened remotely, ...) have no world location; those
/// events are dropped at the recorder.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A player broke a block
    BlockBreak {
        player: String,
        block: String,
        world: String,
        position: Position,
    },

    /// A player placed a block
    BlockPlace {
        player: String,
        block: String,
        world: String,
        position: Position,
    },

    /// A player opened a container
    ContainerOpen {
        player: String,
        /// Upper-case container kind, e.g. `CHEST`, `BARREL`
        container: String,
        world: String,
        position: Option<Position>,
    },

    /// A player clicked a slot in an open container
    ContainerTake {
        player: String,
        container: String,
        item: Option<ItemStack>,
        click: ClickKind,
        world: String,
        position: Option<Position>,
    },

    /// A player landed a killing blow on an entity
    EntityKill {
        player: String,
        /// Upper-case entity kind, e.g. `VILLAGER`
        entity: String,
        world: String,
        position: Position,
    },

    /// A player died
    PlayerDeath {
        player: String,
        /// Killing player's name, or the damaging entity kind; `None` when
        /// the environment did it (fall, lava, ...)
        killer: Option<String>,
        world: String,
        position: Position,
    },

    /// A player disconnected
    PlayerQuit {
        player: String,
        world: String,
        position: Position,
    },
}

impl GameEvent {
    /// The acting player's name (for deaths, the victim)
    pub fn player(&self) -> &str {
        match self {
            GameEvent::BlockBreak { player, .. }
            | GameEvent::BlockPlace { player, .. }
            | GameEvent::ContainerOpen { player, .. }
            | GameEvent::ContainerTake { player, .. }
            | GameEvent::EntityKill { player, .. }
            | GameEvent::PlayerDeath { player, .. }
            | GameEvent::PlayerQuit { player, .. } => player,
        }
    }
}
