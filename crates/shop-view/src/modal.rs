//! Modal dialog state machine.
//!
//! States per modal: hidden, visible. Opening a modal shows the shared overlay
//! and that modal; closing hides the overlay and every modal at once. Opening
//! does not hide other modals, so "one at a time" holds only because every
//! close trigger closes them all.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModalId {
    Cart,
    Seller,
    Profile,
    Orders,
    Register,
    Login,
}

impl ModalId {
    pub const ALL: [ModalId; 6] = [
        ModalId::Cart,
        ModalId::Seller,
        ModalId::Profile,
        ModalId::Orders,
        ModalId::Register,
        ModalId::Login,
    ];

    /// DOM id of the modal element.
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalId::Cart => "cartModal",
            ModalId::Seller => "sellerModal",
            ModalId::Profile => "profileModal",
            ModalId::Orders => "ordersModal",
            ModalId::Register => "registerModal",
            ModalId::Login => "loginModal",
        }
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

impl FromStr for ModalId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalId::ALL
            .into_iter()
            .find(|m| m.element_id() == s)
            .ok_or_else(|| format!("unknown modal: {s}"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSet {
    overlay_visible: bool,
    open: BTreeSet<ModalId>,
}

impl ModalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: ModalId) {
        self.overlay_visible = true;
        self.open.insert(id);
    }

    pub fn close_all(&mut self) {
        self.overlay_visible = false;
        self.open.clear();
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.contains(&id)
    }

    /// Whether the element with this DOM id should be shown. Elements that are
    /// not a known modal never are.
    pub fn is_element_open(&self, element_id: &str) -> bool {
        element_id
            .parse::<ModalId>()
            .is_ok_and(|id| self.is_open(id))
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn open_modals(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.open.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let modals = ModalSet::new();
        assert!(!modals.overlay_visible());
        assert_eq!(modals.open_modals().count(), 0);
    }

    #[test]
    fn open_shows_overlay_and_target() {
        let mut modals = ModalSet::new();
        modals.open(ModalId::Seller);

        assert!(modals.overlay_visible());
        assert!(modals.is_open(ModalId::Seller));
        assert!(!modals.is_open(ModalId::Cart));
    }

    #[test]
    fn close_all_hides_everything_whichever_modal_was_open() {
        for id in ModalId::ALL {
            let mut modals = ModalSet::new();
            modals.open(id);
            modals.close_all();

            assert!(!modals.overlay_visible());
            assert!(ModalId::ALL.iter().all(|m| !modals.is_open(*m)));
        }
    }

    #[test]
    fn opening_a_second_modal_keeps_the_first() {
        let mut modals = ModalSet::new();
        modals.open(ModalId::Login);
        modals.open(ModalId::Register);

        let open: Vec<ModalId> = modals.open_modals().collect();
        assert_eq!(open, vec![ModalId::Register, ModalId::Login]);

        modals.close_all();
        assert_eq!(modals.open_modals().count(), 0);
    }

    #[test]
    fn unknown_elements_stay_closed() {
        let mut modals = ModalSet::new();
        modals.open(ModalId::Cart);

        assert!(modals.is_element_open("cartModal"));
        assert!(!modals.is_element_open("loginModal"));
        assert!(!modals.is_element_open("newsletterModal"));
        assert!(!modals.is_element_open(""));
    }

    #[test]
    fn element_ids_round_trip() {
        for id in ModalId::ALL {
            assert_eq!(id.element_id().parse::<ModalId>(), Ok(id));
        }
        assert!("overlay".parse::<ModalId>().is_err());
    }
}
