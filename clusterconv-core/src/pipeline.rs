//! The conversion protocol.
//!
//! Each direction is a short, ordered list of named steps:
//!
//! - down (hub to spoke): `Copy`, `Relocate`, `Persist`
//! - up (spoke to hub): `Copy`, `Relocate`, `Recall`, `Restore`
//!
//! The pipelines build a fresh value; callers only see it once every step succeeded.

use crate::error::{ConvertError, ConvertResult};
use clusterconv_relocate::Direction;
use clusterconv_stash as stash;
use clusterconv_types::copy::CopyError;
use clusterconv_types::{Hub, Object};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A named pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Structural copy of identically shaped fields.
    Copy,
    /// Relocation rules in the direction's order.
    Relocate,
    /// Write the hub snapshot into the spoke's reserved annotation.
    Persist,
    /// Read the hub snapshot back, if there is one.
    Recall,
    /// Merge hub-only fields from the recalled snapshot.
    Restore,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Copy => "copy",
            Step::Relocate => "relocate",
            Step::Persist => "persist",
            Step::Recall => "recall",
            Step::Restore => "restore",
        }
    }
}

/// A spoke version of a resource family and the hooks that convert it.
pub trait Spoke: Object + Default + Sized {
    type Hub: Hub + Default + Clone + Serialize + DeserializeOwned;

    fn copy_up(&self) -> Result<Self::Hub, CopyError>;

    fn copy_down(hub: &Self::Hub) -> Result<Self, CopyError>;

    /// Applies relocation rules on the freshly copied hub.
    fn relocate_up(&self, hub: &mut Self::Hub) -> Result<(), CopyError>;

    /// Applies relocation rules on the freshly copied spoke.
    fn relocate_down(hub: &Self::Hub, spoke: &mut Self);

    /// Takes hub-only fields from `restored` into `hub`.
    ///
    /// Runs after relocation; values derived from the live spoke stay.
    fn restore(&self, restored: Self::Hub, hub: &mut Self::Hub);
}

/// Per-family entry points.
pub trait Convertible: Spoke {
    /// Up-converts `self` into `dst`. `dst` is untouched on error.
    fn convert_to(&self, dst: &mut Self::Hub) -> ConvertResult<()>;

    /// Down-converts `src` into `self`. `self` is untouched on error.
    fn convert_from(&mut self, src: &Self::Hub) -> ConvertResult<()>;
}

impl<S: Spoke> Convertible for S {
    fn convert_to(&self, dst: &mut Self::Hub) -> ConvertResult<()> {
        *dst = up(self)?;
        Ok(())
    }

    fn convert_from(&mut self, src: &Self::Hub) -> ConvertResult<()> {
        *self = down::<S>(src)?;
        Ok(())
    }
}

pub const DOWN_STEPS: &[Step] = &[Step::Copy, Step::Relocate, Step::Persist];
pub const UP_STEPS: &[Step] = &[Step::Copy, Step::Relocate, Step::Recall, Step::Restore];

enum Flow {
    Continue,
    Done,
}

type StepFn<St> = fn(&mut St) -> ConvertResult<Flow>;

struct DownState<'a, S: Spoke> {
    hub: &'a S::Hub,
    spoke: S,
}

struct UpState<'a, S: Spoke> {
    spoke: &'a S,
    hub: S::Hub,
    restored: Option<S::Hub>,
}

fn run<St>(
    kind: &str,
    direction: Direction,
    steps: &[(Step, StepFn<St>)],
    state: &mut St,
) -> ConvertResult<()> {
    for (step, apply) in steps {
        debug!(
            kind,
            direction = direction.as_str(),
            step = step.as_str(),
            "conversion step"
        );
        if let Flow::Done = apply(state)? {
            debug!(kind, step = step.as_str(), "nothing left to restore");
            break;
        }
    }
    Ok(())
}

/// Hub to spoke.
pub fn down<S: Spoke>(hub: &S::Hub) -> ConvertResult<S> {
    let steps: [(Step, StepFn<DownState<'_, S>>); 3] = [
        (Step::Copy, |st| {
            st.spoke = S::copy_down(st.hub)?;
            Ok(Flow::Continue)
        }),
        (Step::Relocate, |st| {
            S::relocate_down(st.hub, &mut st.spoke);
            Ok(Flow::Continue)
        }),
        (Step::Persist, |st| {
            let blob = stash::persist(st.hub).map_err(ConvertError::Encoding)?;
            stash::write::<S::Hub>(st.spoke.metadata_mut(), blob);
            Ok(Flow::Continue)
        }),
    ];
    debug_assert!(steps.iter().map(|(step, _)| *step).eq(DOWN_STEPS.iter().copied()));

    let mut state = DownState {
        hub,
        spoke: S::default(),
    };
    run(S::KIND, Direction::Down, &steps, &mut state)?;

    let mut spoke = state.spoke;
    spoke.stamp_type_meta();
    Ok(spoke)
}

/// Spoke to hub.
pub fn up<S: Spoke>(spoke: &S) -> ConvertResult<S::Hub> {
    let steps: [(Step, StepFn<UpState<'_, S>>); 4] = [
        (Step::Copy, |st| {
            st.hub = st.spoke.copy_up()?;
            Ok(Flow::Continue)
        }),
        (Step::Relocate, |st| {
            st.spoke.relocate_up(&mut st.hub)?;
            Ok(Flow::Continue)
        }),
        (Step::Recall, |st| {
            st.restored =
                stash::recall::<S::Hub>(st.spoke.metadata()).map_err(ConvertError::StashCorrupt)?;
            Ok(match st.restored {
                Some(_) => Flow::Continue,
                None => Flow::Done,
            })
        }),
        (Step::Restore, |st| {
            if let Some(restored) = st.restored.take() {
                st.spoke.restore(restored, &mut st.hub);
            }
            Ok(Flow::Continue)
        }),
    ];
    debug_assert!(steps.iter().map(|(step, _)| *step).eq(UP_STEPS.iter().copied()));

    let mut state = UpState {
        spoke,
        hub: S::Hub::default(),
        restored: None,
    };
    run(S::KIND, Direction::Up, &steps, &mut state)?;

    let mut hub = state.hub;
    stash::remove::<S::Hub>(hub.metadata_mut());
    hub.stamp_type_meta();
    Ok(hub)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_tables_are_ordered() {
        assert_eq!(DOWN_STEPS, &[Step::Copy, Step::Relocate, Step::Persist]);
        assert_eq!(
            UP_STEPS.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            vec!["copy", "relocate", "recall", "restore"]
        );
    }
}
