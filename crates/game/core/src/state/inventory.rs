//! Player inventory stacks.

/// Well-known item keys carried by the player.
pub mod keys {
    pub const POTION: &str = "potion";
    pub const COIN: &str = "coin";
    pub const SWORD: &str = "sword";
}

/// A stack of identical items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub key: String,
    pub name: String,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(key: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// Ordered list of stacks; order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: Vec<ItemStack>,
}

impl InventoryState {
    pub fn new(items: Vec<ItemStack>) -> Self {
        Self { items }
    }

    /// The kit a new adventurer starts with: two potions, an empty purse and a sword.
    pub fn starter() -> Self {
        Self::new(vec![
            ItemStack::new(keys::POTION, "Healing Potion", 2),
            ItemStack::new(keys::COIN, "Coins", 0),
            ItemStack::new(keys::SWORD, "Iron Sword", 1),
        ])
    }

    pub fn quantity(&self, key: &str) -> u32 {
        self.items
            .iter()
            .find(|stack| stack.key == key)
            .map_or(0, |stack| stack.quantity)
    }

    /// Adds `amount` to the stack with `key`, creating it if missing.
    pub fn add(&mut self, key: &str, amount: u32) {
        match self.items.iter_mut().find(|stack| stack.key == key) {
            Some(stack) => stack.quantity = stack.quantity.saturating_add(amount),
            None => self.items.push(ItemStack::new(key, key, amount)),
        }
    }

    /// Removes one item from the stack with `key`. Returns false when none are left.
    pub fn take_one(&mut self, key: &str) -> bool {
        match self.items.iter_mut().find(|stack| stack.key == key) {
            Some(stack) if stack.quantity > 0 => {
                stack.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn coins(&self) -> u32 {
        self.quantity(keys::COIN)
    }
}
