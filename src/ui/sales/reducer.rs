use crate::session::SessionState;
use crate::ui::mvi::Reducer;
use crate::ui::sales::intent::SalesIntent;
use crate::ui::sales::state::SalesState;

pub struct SalesReducer;

impl Reducer for SalesReducer {
    type State = SalesState;
    type Intent = SalesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SalesIntent::Tap => {
                let session = state.session().apply_tap(state.catalog());
                state.with_session(session)
            }
            SalesIntent::Restore { snapshot } => {
                let session = SessionState::restore(&snapshot, state.catalog());
                state.with_session(session)
            }
            SalesIntent::Reset => {
                let session = SessionState::new(state.catalog());
                state.with_session(session)
            }
        }
    }
}
