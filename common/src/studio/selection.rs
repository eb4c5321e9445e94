use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("copy variation {index} does not exist ({len} available)")]
    CopyOutOfRange { index: usize, len: usize },
    #[error("image prompt {index} does not exist ({len} available)")]
    ImageOutOfRange { index: usize, len: usize },
}

/// Single-select state over the copy variations and image prompts of a bundle.
///
/// The two selectors are independent: changing one never touches the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    copy: Option<usize>,
    image: Option<usize>,
}

impl SelectionState {
    pub fn copy(&self) -> Option<usize> {
        self.copy
    }

    pub fn image(&self) -> Option<usize> {
        self.image
    }

    /// Selects copy variation `index` out of `len`. Returns whether the
    /// selection changed.
    pub fn select_copy(&mut self, index: usize, len: usize) -> Result<bool, SelectionError> {
        if index >= len {
            return Err(SelectionError::CopyOutOfRange { index, len });
        }
        Ok(self.copy.replace(index) != Some(index))
    }

    /// Selects image prompt `index` out of `len`. Returns whether the
    /// selection changed.
    pub fn select_image(&mut self, index: usize, len: usize) -> Result<bool, SelectionError> {
        if index >= len {
            return Err(SelectionError::ImageOutOfRange { index, len });
        }
        Ok(self.image.replace(index) != Some(index))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The platform preview is only shown once something is selected.
    pub fn has_selection(&self) -> bool {
        self.copy.is_some() || self.image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected() {
        let state = SelectionState::default();
        assert_eq!((state.copy(), state.image()), (None, None));
        assert!(!state.has_selection());
    }

    #[test]
    fn selectors_are_independent() {
        let mut state = SelectionState::default();
        state.select_image(2, 3).unwrap();
        for index in 0..4 {
            state.select_copy(index, 4).unwrap();
            assert_eq!(state.image(), Some(2));
        }
        for index in 0..3 {
            state.select_image(index, 3).unwrap();
            assert_eq!(state.copy(), Some(3));
        }
    }

    #[test]
    fn reselecting_the_same_index_is_not_a_change() {
        let mut state = SelectionState::default();
        assert_eq!(state.select_copy(1, 3), Ok(true));
        assert_eq!(state.select_copy(1, 3), Ok(false));
        assert_eq!(state.select_copy(0, 3), Ok(true));
    }

    #[test]
    fn out_of_range_selection_leaves_state_untouched() {
        let mut state = SelectionState::default();
        state.select_copy(0, 1).unwrap();
        assert_eq!(
            state.select_copy(1, 1),
            Err(SelectionError::CopyOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            state.select_image(0, 0),
            Err(SelectionError::ImageOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(state.copy(), Some(0));
        assert_eq!(state.image(), None);
    }

    #[test]
    fn reset_clears_both_selectors() {
        let mut state = SelectionState::default();
        state.select_copy(0, 2).unwrap();
        state.select_image(1, 2).unwrap();
        assert!(state.has_selection());
        state.reset();
        assert_eq!(state, SelectionState::default());
    }
}
