//! Offer detail page reducer.
//!
//! # Flow
//!
//! 1. `OpenOffer` cancels any previous page's scope, resets the page
//!    slice, allocates a fresh scope, and fetches the primary offer
//! 2. Only `OfferLoaded` starts the comments and nearby fetches, in
//!    parallel and independent of each other, inside the same scope
//! 3. A 404 on the primary offer routes to the not-found page and
//!    issues no secondary fetches
//! 4. `LeaveOffer` cancels the scope: responses that settle after
//!    teardown are dropped before they can touch state
//!
//! Review submission validates client-side first, blocks the form
//! while in flight, and re-fetches the comment list on acceptance as
//! an authoritative refresh. The draft is left populated afterwards.

use crate::actions::AppAction;
use crate::environment::ClientEnvironment;
use crate::error::ClientError;
use crate::providers::{Navigator, OffersApi, TokenStore};
use crate::routes::AppRoute;
use crate::state::{AppState, OfferPageState, RequestPhase};
use six_cities_core::effect::{Effect, ScopeId};
use six_cities_core::environment::Clock;
use six_cities_core::reducer::Reducer;
use six_cities_core::{SmallVec, smallvec};

/// Offer detail page reducer.
#[derive(Debug, Clone)]
pub struct OfferPageReducer<A, T, N, C> {
    _phantom: std::marker::PhantomData<(A, T, N, C)>,
}

impl<A, T, N, C> OfferPageReducer<A, T, N, C> {
    /// Create a new offer page reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, T, N, C> Default for OfferPageReducer<A, T, N, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tie an effect to the page's cancellation scope, when one is active.
fn in_page_scope(state: &AppState, effect: Effect<AppAction>) -> Effect<AppAction> {
    match state.offer_page.scope {
        Some(scope) => effect.in_scope(scope),
        None => effect,
    }
}

impl<A, T, N, C> Reducer for OfferPageReducer<A, T, N, C>
where
    A: OffersApi + Clone + Send + Sync + 'static,
    T: TokenStore + Clone,
    N: Navigator + Clone,
    C: Clock + Clone,
{
    type State = AppState;
    type Action = AppAction;
    type Environment = ClientEnvironment<A, T, N, C>;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Primary offer
            // ═══════════════════════════════════════════════════════════════
            AppAction::OpenOffer(id) => {
                // Offer-to-offer navigation (nearby cards) never passes
                // through LeaveOffer, so the previous page's fetches must
                // be cancelled here or their late responses land in the
                // freshly reset slice
                let stale = state.offer_page.scope.take();
                let scope = ScopeId::next();
                state.offer_page = OfferPageState {
                    load_phase: RequestPhase::Pending,
                    scope: Some(scope),
                    ..OfferPageState::default()
                };

                let api = env.api.clone();
                let fetch = Effect::future(async move {
                    match api.fetch_offer(id).await {
                        Ok(offer) => Some(AppAction::OfferLoaded(offer)),
                        Err(err) if err.is_not_found() => Some(AppAction::OfferMissing(id)),
                        Err(err) => Some(AppAction::OfferFailed(err)),
                    }
                })
                .in_scope(scope);

                match stale {
                    Some(old) => smallvec![Effect::Cancel(old), fetch],
                    None => smallvec![fetch],
                }
            },

            AppAction::OfferLoaded(offer) => {
                let id = offer.id;
                state.offer_page.current = Some(offer);
                state.offer_page.load_phase = RequestPhase::Fulfilled;

                // Comments and nearby start only now, in parallel and
                // independent of each other: either can fail without
                // affecting the other
                let aggregation = Effect::merge(vec![
                    Effect::future(async move { Some(AppAction::FetchComments(id)) }),
                    Effect::future(async move { Some(AppAction::FetchNearby(id)) }),
                ]);
                smallvec![in_page_scope(state, aggregation)]
            },

            AppAction::OfferMissing(id) => {
                tracing::debug!(offer = %id, "Offer not found");
                state.offer_page.load_phase = RequestPhase::Rejected;
                state.record_error(ClientError::Http { status: 404 }, env.clock.now());
                env.navigator.navigate(&AppRoute::NotFound);
                smallvec![Effect::None]
            },

            AppAction::OfferFailed(err) => {
                state.offer_page.load_phase = RequestPhase::Rejected;
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Comments
            // ═══════════════════════════════════════════════════════════════
            AppAction::FetchComments(id) => {
                state.offer_page.comments_phase = RequestPhase::Pending;

                let api = env.api.clone();
                let effect = Effect::future(async move {
                    match api.fetch_comments(id).await {
                        Ok(comments) => Some(AppAction::CommentsLoaded(comments)),
                        Err(err) => Some(AppAction::CommentsFailed(err)),
                    }
                });
                smallvec![in_page_scope(state, effect)]
            },

            AppAction::CommentsLoaded(comments) => {
                state.offer_page.comments = comments;
                state.offer_page.comments_phase = RequestPhase::Fulfilled;
                smallvec![Effect::None]
            },

            AppAction::CommentsFailed(err) => {
                state.offer_page.comments_phase = RequestPhase::Rejected;
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Nearby offers
            // ═══════════════════════════════════════════════════════════════
            AppAction::FetchNearby(id) => {
                state.offer_page.nearby_phase = RequestPhase::Pending;

                let api = env.api.clone();
                let effect = Effect::future(async move {
                    match api.fetch_nearby(id).await {
                        Ok(offers) => Some(AppAction::NearbyLoaded(offers)),
                        Err(err) => Some(AppAction::NearbyFailed(err)),
                    }
                });
                smallvec![in_page_scope(state, effect)]
            },

            AppAction::NearbyLoaded(mut offers) => {
                offers.truncate(env.config.nearby_limit);
                state.offer_page.nearby = offers;
                state.offer_page.nearby_phase = RequestPhase::Fulfilled;
                smallvec![Effect::None]
            },

            AppAction::NearbyFailed(err) => {
                state.offer_page.nearby_phase = RequestPhase::Rejected;
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Review form
            // ═══════════════════════════════════════════════════════════════
            AppAction::UpdateDraft(draft) => {
                state.offer_page.draft = draft;
                smallvec![Effect::None]
            },

            AppAction::SubmitComment { id, draft } => {
                if !draft.is_submittable() {
                    state.offer_page.submit_phase = RequestPhase::Rejected;
                    state.record_error(
                        ClientError::Validation(
                            "review needs a rating of 1 to 5 and 50 to 300 characters of text"
                                .to_string(),
                        ),
                        env.clock.now(),
                    );
                    return smallvec![Effect::None];
                }
                let Some(rating) = draft.rating else {
                    // Unreachable past is_submittable(), but no panic path
                    return smallvec![Effect::None];
                };

                state.offer_page.form_blocked = true;
                state.offer_page.submit_phase = RequestPhase::Pending;

                let api = env.api.clone();
                let text = draft.comment;
                let effect = Effect::future(async move {
                    match api.post_comment(id, rating, text).await {
                        Ok(comments) => Some(AppAction::CommentAccepted(comments)),
                        Err(err) => Some(AppAction::CommentRejected(err)),
                    }
                });
                smallvec![in_page_scope(state, effect)]
            },

            AppAction::CommentAccepted(comments) => {
                state.offer_page.comments = comments;
                state.offer_page.form_blocked = false;
                state.offer_page.submit_phase = RequestPhase::Fulfilled;
                // The draft stays populated; clearing the form is the UI's
                // call, not the coordinator's

                // Authoritative refresh of the comment list
                match state.offer_page.current.as_ref().map(|o| o.id) {
                    Some(id) => {
                        let refresh =
                            Effect::future(async move { Some(AppAction::FetchComments(id)) });
                        smallvec![in_page_scope(state, refresh)]
                    },
                    None => smallvec![Effect::None],
                }
            },

            AppAction::CommentRejected(err) => {
                state.offer_page.form_blocked = false;
                state.offer_page.submit_phase = RequestPhase::Rejected;
                state.record_error(err, env.clock.now());
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Teardown
            // ═══════════════════════════════════════════════════════════════
            AppAction::LeaveOffer => {
                let scope = state.offer_page.scope.take();
                state.offer_page = OfferPageState::default();

                match scope {
                    Some(scope) => smallvec![Effect::Cancel(scope)],
                    None => smallvec![Effect::None],
                }
            },

            // Routed to other reducers
            _ => smallvec![Effect::None],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::test_support::test_env;
    use crate::state::fixtures::{sample_comment, sample_offer};
    use crate::state::{OfferId, ReviewDraft};
    use six_cities_testing::{ReducerTest, assertions};

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            rating: Some(4),
            comment: "a".repeat(80),
        }
    }

    #[test]
    fn test_open_offer_resets_slice_and_allocates_scope() {
        let mut state = AppState::default();
        state.offer_page.comments = vec![sample_comment(1)];

        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::OpenOffer(OfferId(7)))
            .then_state(|state| {
                assert!(state.offer_page.comments.is_empty());
                assert_eq!(state.offer_page.load_phase, RequestPhase::Pending);
                assert!(state.offer_page.scope.is_some());
            })
            .then_effects(|effects| {
                assert!(
                    effects
                        .iter()
                        .any(|e| matches!(e, Effect::Cancellable { .. })),
                    "primary fetch must be scoped"
                );
            })
            .run();
    }

    #[test]
    fn test_open_offer_cancels_previous_page_scope() {
        let mut state = AppState::default();
        let old_scope = ScopeId::next();
        state.offer_page.scope = Some(old_scope);
        state.offer_page.current = Some(sample_offer(OfferId(1)));

        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::OpenOffer(OfferId(2)))
            .then_state(move |state| {
                assert_ne!(state.offer_page.scope, Some(old_scope));
                assert!(state.offer_page.current.is_none());
            })
            .then_effects(move |effects| {
                assertions::assert_has_cancel_effect(effects, old_scope);
                assert!(
                    effects
                        .iter()
                        .any(|e| matches!(e, Effect::Cancellable { .. })),
                    "new primary fetch must run under the new scope"
                );
            })
            .run();
    }

    #[test]
    fn test_offer_loaded_fires_scoped_parallel_aggregation() {
        let mut state = AppState::default();
        let scope = ScopeId::next();
        state.offer_page.scope = Some(scope);

        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::OfferLoaded(sample_offer(OfferId(7))))
            .then_state(|state| {
                assert_eq!(state.offer_page.load_phase, RequestPhase::Fulfilled);
                assert!(state.offer_page.current.is_some());
            })
            .then_effects(move |effects| {
                assertions::assert_has_scoped_effect(effects, scope);
            })
            .run();
    }

    #[test]
    fn test_offer_missing_navigates_to_not_found_without_fetches() {
        let env = test_env();
        let navigator = env.navigator.clone();

        ReducerTest::new(OfferPageReducer::new())
            .with_env(env)
            .given_state(AppState::default())
            .when_action(AppAction::OfferMissing(OfferId(99)))
            .then_state(|state| {
                assert_eq!(state.offer_page.load_phase, RequestPhase::Rejected);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();

        assert_eq!(navigator.routes(), vec![AppRoute::NotFound]);
    }

    #[test]
    fn test_nearby_loaded_trims_to_limit() {
        let offers = (1..=5).map(|i| sample_offer(OfferId(i))).collect();

        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::NearbyLoaded(offers))
            .then_state(|state| {
                assert_eq!(state.offer_page.nearby.len(), 3);
            })
            .run();
    }

    #[test]
    fn test_submit_invalid_draft_is_rejected_without_network() {
        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::SubmitComment {
                id: OfferId(7),
                draft: ReviewDraft {
                    rating: None,
                    comment: "too short".to_string(),
                },
            })
            .then_state(|state| {
                assert_eq!(state.offer_page.submit_phase, RequestPhase::Rejected);
                assert!(!state.offer_page.form_blocked);
                assert!(matches!(
                    state.last_error.as_ref().map(|e| &e.error),
                    Some(ClientError::Validation(_))
                ));
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn test_submit_valid_draft_blocks_form() {
        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::SubmitComment {
                id: OfferId(7),
                draft: valid_draft(),
            })
            .then_state(|state| {
                assert!(state.offer_page.form_blocked);
                assert_eq!(state.offer_page.submit_phase, RequestPhase::Pending);
            })
            .then_effects(|effects| {
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_comment_accepted_unblocks_and_keeps_draft() {
        let mut state = AppState::default();
        state.offer_page.current = Some(sample_offer(OfferId(7)));
        state.offer_page.form_blocked = true;
        state.offer_page.draft = valid_draft();

        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::CommentAccepted(vec![sample_comment(1)]))
            .then_state(|state| {
                assert!(!state.offer_page.form_blocked);
                assert_eq!(state.offer_page.submit_phase, RequestPhase::Fulfilled);
                assert_eq!(state.offer_page.comments.len(), 1);
                // Draft intentionally survives submission
                assert_eq!(state.offer_page.draft, valid_draft());
            })
            .then_effects(|effects| {
                // Authoritative comment refresh
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_leave_offer_cancels_scope_and_clears_slice() {
        let mut state = AppState::default();
        let scope = ScopeId::next();
        state.offer_page.scope = Some(scope);
        state.offer_page.current = Some(sample_offer(OfferId(7)));

        ReducerTest::new(OfferPageReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(AppAction::LeaveOffer)
            .then_state(|state| {
                assert!(state.offer_page.current.is_none());
                assert!(state.offer_page.scope.is_none());
            })
            .then_effects(move |effects| {
                assertions::assert_has_cancel_effect(effects, scope);
            })
            .run();
    }
}
