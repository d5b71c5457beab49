//! Filter engine: name substring plus role membership.

use std::any::Any;

use log::{debug, warn};
use roster_states::{
    Compute, ComputeDeps, ComputeStage, Dep, Reg, State, Updater, assign_impl,
};
use ustr::Ustr;

use crate::{Dataset, RowRecord};

/// Label of the sentinel entry that lifts the role restriction.
pub const ALL_ROLES: &str = "All Roles";

/// Current filter criteria. Both parts start empty, which matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    name: String,
    roles: Vec<Ustr>,
}

/// An entry of the role dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleOption {
    All,
    Role(Ustr),
}

impl RoleOption {
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_ROLES,
            Self::Role(role) => role.as_str(),
        }
    }
}

impl FilterState {
    pub fn new(name: impl Into<String>, roles: impl IntoIterator<Item = Ustr>) -> Self {
        let mut filter = Self {
            name: name.into(),
            roles: Vec::new(),
        };
        filter.set_roles(roles);
        filter
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Selected roles, in the order they were picked.
    pub fn roles(&self) -> &[Ustr] {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }

    pub fn set_roles(&mut self, roles: impl IntoIterator<Item = Ustr>) {
        self.roles.clear();
        for role in roles {
            if !self.roles.contains(&role) {
                self.roles.push(role);
            }
        }
    }

    pub fn toggle_role(&mut self, role: Ustr) {
        if let Some(pos) = self.roles.iter().position(|r| *r == role) {
            self.roles.remove(pos);
        } else {
            self.roles.push(role);
        }
    }

    pub fn clear_roles(&mut self) {
        self.roles.clear();
    }

    /// Applies a dropdown pick. "All Roles" clears the restriction, any other
    /// entry toggles its role; unticking the last role clears it as well.
    pub fn apply_role_option(&mut self, option: RoleOption) {
        match option {
            RoleOption::All => self.clear_roles(),
            RoleOption::Role(role) => self.toggle_role(role),
        }
        debug!("Role filter is now {:?}", self.roles);
    }

    pub fn is_unrestricted(&self) -> bool {
        self.name.is_empty() && self.roles.is_empty()
    }

    pub fn matches(&self, row: &RowRecord) -> bool {
        RowMatcher::new(self).matches(row)
    }
}

impl State for FilterState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Filter criteria with the needle lowercased once per pass.
struct RowMatcher<'a> {
    needle: String,
    roles: &'a [Ustr],
}

impl<'a> RowMatcher<'a> {
    fn new(filter: &'a FilterState) -> Self {
        Self {
            needle: filter.name.to_lowercase(),
            roles: &filter.roles,
        }
    }

    fn matches(&self, row: &RowRecord) -> bool {
        let name_ok = self.needle.is_empty() || row.name.to_lowercase().contains(&self.needle);
        let role_ok = self.roles.is_empty() || self.roles.iter().any(|r| r.as_str() == row.role);
        name_ok && role_ok
    }
}

/// Indices of the rows matching `filter`, in dataset order.
pub fn filter_rows(rows: &[RowRecord], filter: &FilterState) -> Vec<usize> {
    let matcher = RowMatcher::new(filter);
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matcher.matches(row))
        .map(|(index, _)| index)
        .collect()
}

/// Rows passing the current filter, as dataset indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredRows {
    indices: Vec<usize>,
}

impl FilteredRows {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Compute for FilteredRows {
    fn deps(&self) -> ComputeDeps {
        (vec![Reg::of::<Dataset>(), Reg::of::<FilterState>()], vec![])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage {
        let (dataset, filter) = match (deps.state::<Dataset>(), deps.state::<FilterState>()) {
            (Ok(dataset), Ok(filter)) => (dataset, filter),
            (Err(err), _) | (_, Err(err)) => {
                warn!("Cannot filter rows: {err}");
                return ComputeStage::Finished;
            }
        };

        let indices = filter_rows(dataset.rows(), filter);
        debug!(
            "Filter {:?} / {:?} kept {} of {} rows",
            filter.name(),
            filter.roles(),
            indices.len(),
            dataset.len()
        );
        updater.set(Self { indices });
        ComputeStage::Finished
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Entries of the role dropdown after "All Roles".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleOptions {
    roles: Vec<Ustr>,
}

impl RoleOptions {
    pub fn roles(&self) -> &[Ustr] {
        &self.roles
    }

    /// "All Roles" followed by every distinct role.
    pub fn options(&self) -> impl Iterator<Item = RoleOption> + '_ {
        std::iter::once(RoleOption::All).chain(self.roles.iter().copied().map(RoleOption::Role))
    }
}

impl Compute for RoleOptions {
    fn deps(&self) -> ComputeDeps {
        (vec![Reg::of::<Dataset>()], vec![])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage {
        match deps.state::<Dataset>() {
            Ok(dataset) => updater.set(Self {
                roles: dataset.role_options(),
            }),
            Err(err) => warn!("Cannot collect roles: {err}"),
        }
        ComputeStage::Finished
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
