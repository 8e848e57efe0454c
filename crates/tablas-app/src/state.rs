// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::forms::{FieldError, RangeForm};
use crate::grid;
use crate::ids::{TabId, TabIdSequence};
use crate::model::{DeleteCandidate, Field, Range, Tab};

/// Everything one run of the tool owns: the live form, the ordered tab
/// collection, focus, and the delete-candidate list. Handlers receive
/// this by reference; there is no ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    form: RangeForm,
    tabs: Vec<Tab>,
    ids: TabIdSequence,
    active: Option<TabId>,
    pinned: Option<TabId>,
    delete_candidates: Vec<DeleteCandidate>,
    status_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetField(Field, String),
    /// Validate the form and add a tab when it passes.
    Submit,
    /// Add a tab for an already-validated range (seeding paths).
    AddTab(Range),
    RemoveTab(TabId),
    RemoveTabs(BTreeSet<TabId>),
    RemoveAll,
    NextTab,
    PrevTab,
    FocusTab(TabId),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    FieldEdited(Field),
    ValidationFailed(Field, FieldError),
    TabAdded(TabId),
    TabRemoved(TabId),
    TabsRemoved(Vec<TabId>),
    CollectionCleared(usize),
    DeleteListResynced,
    FocusChanged(Option<TabId>),
    StatusUpdated(String),
    StatusCleared,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose first tab is a pinned default: it never appears in
    /// the delete-candidate list and ignores removal.
    pub fn with_pinned_tab(range: Range) -> Self {
        let mut session = Self::new();
        session.form = RangeForm::with_range(range);
        session.dispatch(SessionCommand::AddTab(range));
        session.pinned = session.active;
        session.resync_delete_candidates();
        session
    }

    pub fn form(&self) -> &RangeForm {
        &self.form
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
            .and_then(|active| self.tabs.iter().position(|tab| tab.id == active))
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_index().map(|index| &self.tabs[index])
    }

    pub fn is_pinned(&self, id: TabId) -> bool {
        self.pinned == Some(id)
    }

    pub fn delete_candidates(&self) -> &[DeleteCandidate] {
        &self.delete_candidates
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    pub fn dispatch(&mut self, command: SessionCommand) -> Vec<SessionEvent> {
        match command {
            SessionCommand::SetField(field, value) => {
                self.form.set_raw(field, value);
                vec![SessionEvent::FieldEdited(field)]
            }
            SessionCommand::Submit => self.submit(),
            SessionCommand::AddTab(range) => self.add_tab(range),
            SessionCommand::RemoveTab(id) => self.remove_tab(id),
            SessionCommand::RemoveTabs(ids) => self.remove_tabs(&ids),
            SessionCommand::RemoveAll => self.remove_all(),
            SessionCommand::NextTab => self.rotate_focus(1),
            SessionCommand::PrevTab => self.rotate_focus(-1),
            SessionCommand::FocusTab(id) => self.focus_tab(id),
            SessionCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![SessionEvent::StatusUpdated(message)]
            }
            SessionCommand::ClearStatus => {
                self.status_line = None;
                vec![SessionEvent::StatusCleared]
            }
        }
    }

    fn submit(&mut self) -> Vec<SessionEvent> {
        match self.form.validate() {
            Some(range) => self.add_tab(range),
            None => self
                .form
                .first_error()
                .map(|(field, error)| vec![SessionEvent::ValidationFailed(field, error)])
                .unwrap_or_default(),
        }
    }

    fn add_tab(&mut self, range: Range) -> Vec<SessionEvent> {
        let id = self.ids.next_id();
        self.tabs.push(Tab {
            id,
            label: range.label(),
            view: grid::render(range),
        });
        self.active = Some(id);
        self.resync_delete_candidates();
        vec![
            SessionEvent::TabAdded(id),
            SessionEvent::FocusChanged(self.active),
            SessionEvent::DeleteListResynced,
        ]
    }

    fn remove_tab(&mut self, id: TabId) -> Vec<SessionEvent> {
        if self.pinned == Some(id) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(index) = self.tabs.iter().position(|tab| tab.id == id) {
            self.tabs.remove(index);
            events.push(SessionEvent::TabRemoved(id));
            events.extend(self.refocus_after_removal(index));
        }
        self.resync_delete_candidates();
        events.push(SessionEvent::DeleteListResynced);
        events
    }

    /// Remove every listed tab at once; callers never observe a partial
    /// collection. The empty set is a complete no-op.
    fn remove_tabs(&mut self, ids: &BTreeSet<TabId>) -> Vec<SessionEvent> {
        if ids.is_empty() {
            return Vec::new();
        }
        let pinned = self.pinned;
        let previous_index = self.active_index();
        let mut removed = Vec::new();
        self.tabs.retain(|tab| {
            let doomed = ids.contains(&tab.id) && pinned != Some(tab.id);
            if doomed {
                removed.push(tab.id);
            }
            !doomed
        });

        let mut events = Vec::new();
        if !removed.is_empty() {
            events.push(SessionEvent::TabsRemoved(removed));
            if let Some(active) = self.active
                && !self.tabs.iter().any(|tab| tab.id == active)
            {
                events.extend(self.refocus_at(previous_index));
            }
        }
        self.resync_delete_candidates();
        events.push(SessionEvent::DeleteListResynced);
        events
    }

    fn remove_all(&mut self) -> Vec<SessionEvent> {
        let pinned = self.pinned;
        let before = self.tabs.len();
        self.tabs.retain(|tab| pinned == Some(tab.id));
        let removed = before - self.tabs.len();

        let mut events = Vec::new();
        if removed > 0 {
            events.push(SessionEvent::CollectionCleared(removed));
        }
        if let Some(active) = self.active
            && !self.tabs.iter().any(|tab| tab.id == active)
        {
            self.active = self.tabs.last().map(|tab| tab.id);
            events.push(SessionEvent::FocusChanged(self.active));
        }
        self.resync_delete_candidates();
        events.push(SessionEvent::DeleteListResynced);
        events
    }

    fn refocus_after_removal(&mut self, removed_index: usize) -> Option<SessionEvent> {
        if let Some(active) = self.active
            && self.tabs.iter().any(|tab| tab.id == active)
        {
            return None;
        }
        self.refocus_at(Some(removed_index))
    }

    /// Focus the tab now occupying the given position, else the last
    /// tab, else nothing.
    fn refocus_at(&mut self, index: Option<usize>) -> Option<SessionEvent> {
        let fallback = index
            .and_then(|index| self.tabs.get(index))
            .or_else(|| self.tabs.last());
        self.active = fallback.map(|tab| tab.id);
        Some(SessionEvent::FocusChanged(self.active))
    }

    fn rotate_focus(&mut self, delta: isize) -> Vec<SessionEvent> {
        if self.tabs.is_empty() {
            return Vec::new();
        }
        let current = self.active_index().unwrap_or(0) as isize;
        let len = self.tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        if self.active == Some(self.tabs[next].id) {
            return Vec::new();
        }
        self.active = Some(self.tabs[next].id);
        vec![SessionEvent::FocusChanged(self.active)]
    }

    fn focus_tab(&mut self, id: TabId) -> Vec<SessionEvent> {
        if self.active != Some(id) && self.tabs.iter().any(|tab| tab.id == id) {
            self.active = Some(id);
            return vec![SessionEvent::FocusChanged(self.active)];
        }
        Vec::new()
    }

    /// Rebuild the delete-candidate list from the live collection.
    /// Idempotent; runs after every structural mutation so the list
    /// always mirrors the current tabs (minus a pinned default).
    pub fn resync_delete_candidates(&mut self) {
        self.delete_candidates = self
            .tabs
            .iter()
            .filter(|tab| self.pinned != Some(tab.id))
            .map(|tab| DeleteCandidate {
                id: tab.id,
                label: tab.label.clone(),
            })
            .collect();
    }
}
