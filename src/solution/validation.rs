use super::Solution;
use crate::moves::Move;
use crate::problem::Color;

impl Solution<'_> {
    /// Whether the severity rules allow `mv`.
    ///
    /// RED disks never move and a YELLOW disk may not land on a server whose
    /// aggregate color is YELLOW. An exchange of two distinct disks that share
    /// the same RED or YELLOW color is always allowed, since it leaves both
    /// servers' worst color unchanged.
    ///
    /// # Panics
    ///
    /// If any atom breaks a precondition (see [`Solution::apply_move`]).
    pub fn is_move_correct(&self, mv: &Move) -> bool {
        self.assert_preconditions(mv);

        if let [first, second] = mv.atoms() {
            let exchange = first.disk != second.disk
                && first.source == second.destination
                && first.destination == second.source;
            let first_color = self.disk_color(first.disk);
            let second_color = self.disk_color(second.disk);
            if exchange
                && first_color == second_color
                && matches!(first_color, Color::Red | Color::Yellow)
            {
                return true;
            }
        }

        mv.atoms().iter().all(|atom| match self.disk_color(atom.disk) {
            Color::Red => false,
            Color::Yellow => self.server_color(atom.destination) != Color::Yellow,
            Color::Green | Color::None => true,
        })
    }

    /// Check every atom of `mv` against the distribution it would see when
    /// applied in order. Breaches are caller bugs and abort.
    pub(crate) fn assert_preconditions(&self, mv: &Move) {
        let servers = self.instance.num_servers();
        let disks = self.distribution.len();
        let mut relocated: Vec<(usize, usize)> = Vec::with_capacity(mv.len());

        for atom in mv.atoms() {
            assert!(atom.disk < disks, "move {atom}: disk {} out of range ({disks} disks)", atom.disk);
            assert!(
                atom.source < servers && atom.destination < servers,
                "move {atom}: server out of range ({servers} servers)"
            );
            assert!(atom.source != atom.destination, "move {atom}: source equals destination");

            let current = relocated
                .iter()
                .rev()
                .find(|(disk, _)| *disk == atom.disk)
                .map_or(self.distribution[atom.disk].server, |&(_, server)| server);
            assert!(
                atom.source == current,
                "move {atom}: disk {} is on server {current}, not {}",
                atom.disk,
                atom.source
            );

            relocated.push((atom.disk, atom.destination));
        }
    }
}
