//! Exam-room views over imported participants: room list, seating plan and
//! the interactive attendance roll. Everything here lives in memory only.

use crate::models::Participant;

/// Seats per row in the seating plan.
pub const SEAT_COLUMNS: usize = 5;
/// Seats shown per room.
pub const MAX_SEATS: usize = 20;

/// Distinct non-empty room labels, in first-seen order.
pub fn rooms(participants: &[Participant]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for p in participants {
        if !p.ruang.is_empty() && !out.contains(&p.ruang) {
            out.push(p.ruang.clone());
        }
    }
    out
}

/// Participants of exactly `room`.
pub fn in_room<'a>(participants: &'a [Participant], room: &str) -> Vec<&'a Participant> {
    participants.iter().filter(|p| p.ruang == room).collect()
}

/// Printable roster for one room plus its seat grid.
#[derive(Debug)]
pub struct SeatingPlan<'a> {
    pub room: String,
    pub roster: Vec<&'a Participant>,
    pub seats: Vec<Vec<&'a Participant>>,
}

impl<'a> SeatingPlan<'a> {
    pub fn new(participants: &'a [Participant], room: &str) -> Self {
        let roster = in_room(participants, room);
        let seats = roster
            .iter()
            .take(MAX_SEATS)
            .copied()
            .collect::<Vec<_>>()
            .chunks(SEAT_COLUMNS)
            .map(|c| c.to_vec())
            .collect();

        Self {
            room: room.to_string(),
            roster,
            seats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

/// Present / absent tally of the visible participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RollCounts {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
}

/// Attendance roll state.
#[derive(Debug, Clone, Default)]
pub struct Roll {
    participants: Vec<Participant>,
    selected_room: Option<String>,
}

impl Roll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list (no merge) and select the first room.
    pub fn load(&mut self, participants: Vec<Participant>) {
        self.selected_room = participants
            .iter()
            .find(|p| !p.ruang.is_empty())
            .map(|p| p.ruang.clone());
        self.participants = participants;
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn rooms(&self) -> Vec<String> {
        rooms(&self.participants)
    }

    pub fn selected_room(&self) -> Option<&str> {
        self.selected_room.as_deref()
    }

    /// `None` or an empty label shows every participant.
    pub fn select_room(&mut self, room: Option<&str>) {
        self.selected_room = room.filter(|r| !r.is_empty()).map(str::to_string);
    }

    pub fn visible(&self) -> Vec<&Participant> {
        match &self.selected_room {
            Some(room) => in_room(&self.participants, room),
            None => self.participants.iter().collect(),
        }
    }

    /// Set presence of every participant with this NIS; returns how many.
    pub fn toggle(&mut self, nis: &str, value: bool) -> usize {
        let mut n = 0;
        for p in self.participants.iter_mut().filter(|p| p.nis == nis) {
            p.hadir = value;
            n += 1;
        }
        n
    }

    /// Set presence for the selected room, or for everyone.
    pub fn set_all(&mut self, value: bool) {
        let room = self.selected_room.clone();
        for p in self.participants.iter_mut() {
            if room.as_deref().is_none_or(|r| p.ruang == r) {
                p.hadir = value;
            }
        }
    }

    pub fn counts(&self) -> RollCounts {
        let visible = self.visible();
        let total = visible.len();
        let present = visible.iter().filter(|p| p.hadir).count();
        RollCounts {
            total,
            present,
            absent: total - present,
        }
    }

    pub fn clear(&mut self) {
        self.participants.clear();
        self.selected_room = None;
    }
}
