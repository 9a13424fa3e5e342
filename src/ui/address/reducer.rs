use crate::ui::mvi::Reducer;

use super::intent::AddressIntent;
use super::state::AddressBarState;

pub struct AddressReducer;

impl Reducer for AddressReducer {
    type State = AddressBarState;
    type Intent = AddressIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, AddressIntent::Open { location }) => AddressBarState::Editing { buffer: location },
            (AddressBarState::Editing { mut buffer }, AddressIntent::Insert(ch)) => {
                if !ch.is_control() {
                    buffer.push(ch);
                }
                AddressBarState::Editing { buffer }
            }
            (AddressBarState::Editing { mut buffer }, AddressIntent::Backspace) => {
                buffer.pop();
                AddressBarState::Editing { buffer }
            }
            (_, AddressIntent::Close) => AddressBarState::Hidden,
            (state, _) => state,
        }
    }
}
