//! Cutscene playback: frame advancing and dismissal.

use bevy::prelude::*;

use crate::data::cutscenes::script;
use crate::shared::*;

/// Result of advancing the active cutscene by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutsceneStep {
    /// Moved to the next frame.
    Advanced,
    /// Advanced past the last frame; the cutscene is closed.
    Dismissed(CutsceneKind),
    /// Nothing was playing.
    Idle,
}

pub fn start_cutscene(cutscene: &mut CutscenePlayer, kind: CutsceneKind) {
    info!("Cutscene started: {}", script(kind).title);
    cutscene.active = Some(kind);
    cutscene.frame = 0;
}

pub fn advance_cutscene(cutscene: &mut CutscenePlayer) -> CutsceneStep {
    let Some(kind) = cutscene.active else {
        return CutsceneStep::Idle;
    };

    if cutscene.frame + 1 < script(kind).frames.len() {
        cutscene.frame += 1;
        CutsceneStep::Advanced
    } else {
        dismiss_cutscene(cutscene);
        CutsceneStep::Dismissed(kind)
    }
}

/// Close the active cutscene and rewind the frame index.
pub fn dismiss_cutscene(cutscene: &mut CutscenePlayer) -> Option<CutsceneKind> {
    let kind = cutscene.active.take()?;
    cutscene.frame = 0;
    info!("Cutscene dismissed: {}", script(kind).title);
    Some(kind)
}

/// The frame currently on screen, if any.
pub fn current_frame(cutscene: &CutscenePlayer) -> Option<&'static CutsceneFrame> {
    let kind = cutscene.active?;
    script(kind).frames.get(cutscene.frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_walks_every_frame_then_dismisses() {
        let mut cutscene = CutscenePlayer::default();
        start_cutscene(&mut cutscene, CutsceneKind::BossAppear);

        assert_eq!(advance_cutscene(&mut cutscene), CutsceneStep::Advanced);
        assert_eq!(advance_cutscene(&mut cutscene), CutsceneStep::Advanced);
        assert_eq!(cutscene.frame, 2);
        assert_eq!(
            advance_cutscene(&mut cutscene),
            CutsceneStep::Dismissed(CutsceneKind::BossAppear)
        );
        assert!(!cutscene.is_active());
        assert_eq!(cutscene.frame, 0);
    }

    #[test]
    fn test_intro_has_five_frames() {
        let mut cutscene = CutscenePlayer::default();
        start_cutscene(&mut cutscene, CutsceneKind::Intro);

        let mut advanced = 0;
        while advance_cutscene(&mut cutscene) == CutsceneStep::Advanced {
            advanced += 1;
        }
        assert_eq!(advanced, 4);
    }

    #[test]
    fn test_idle_player_ignores_advance_and_dismiss() {
        let mut cutscene = CutscenePlayer::default();
        assert_eq!(advance_cutscene(&mut cutscene), CutsceneStep::Idle);
        assert_eq!(dismiss_cutscene(&mut cutscene), None);
        assert!(current_frame(&cutscene).is_none());
    }

    #[test]
    fn test_restart_resets_frame() {
        let mut cutscene = CutscenePlayer::default();
        start_cutscene(&mut cutscene, CutsceneKind::Intro);
        advance_cutscene(&mut cutscene);
        start_cutscene(&mut cutscene, CutsceneKind::Victory);

        assert_eq!(cutscene.frame, 0);
        assert_eq!(current_frame(&cutscene).unwrap().text, "Cat Alpha is defeated!");
    }
}
