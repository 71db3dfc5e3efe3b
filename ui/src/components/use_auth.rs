//! Auth/profile hook: joins the session store with the backend profile.

use dioxus::prelude::*;

use paylink_common::fetch::FetchSequence;
use paylink_common::profile::{Business, Profile};

use super::app::Route;
use super::backend_api::BackendApi;
use super::identity_client::{self, IdentityClient};
use super::session::{self, SessionState};

/// Options for [`use_auth`].
#[derive(Clone, Debug, Default)]
pub struct UseAuthOptions {
    /// Leave for the login screen once the session resolves anonymous.
    pub require_auth: bool,
    /// Where the auth guard redirects to; the login screen by default.
    pub redirect_to: Option<Route>,
}

/// Backend profile portion of the auth state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub businesses: Option<Vec<Business>>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Combined auth view handed to consumers; each read is a fresh snapshot.
#[derive(Clone, Copy)]
pub struct Auth {
    pub session: Signal<SessionState>,
    pub profile: Signal<ProfileState>,
}

pub fn use_auth(options: UseAuthOptions) -> Auth {
    let session = session::use_session();
    let mut profile = use_signal(ProfileState::default);
    let seq = use_hook(FetchSequence::new);
    let nav = use_navigator();

    // Key the effects on what actually matters so a token refresh (which
    // rewrites the session signal) does not retrigger them.
    let user_key = use_memo(move || session.read().user.as_ref().map(|u| u.user_id.clone()));
    let resolved = use_memo(move || session.read().resolved);

    // Auth guard: one redirect per transition into the anonymous state.
    use_effect(move || {
        if options.require_auth && resolved() && user_key().is_none() {
            let target = options.redirect_to.clone().unwrap_or(Route::Login {});
            nav.replace(target);
        }
    });

    // Profile fetch, superseded whenever the session user changes.
    use_effect(move || {
        let user = user_key();
        let ticket = seq.begin();
        if user.is_none() {
            profile.set(ProfileState::default());
            return;
        }
        profile.set(ProfileState {
            loading: true,
            ..Default::default()
        });
        let seq = seq.clone();
        spawn(async move {
            let result = async {
                let token = session::current_id_token(session)
                    .await
                    .ok_or_else(|| "not authenticated".to_string())?;
                BackendApi::from_env()
                    .fetch_me(&token)
                    .await
                    .map_err(|e| e.to_string())
            }
            .await;
            if !seq.is_current(&ticket) {
                return;
            }
            match result {
                Ok(me) => profile.set(ProfileState {
                    profile: Some(Profile::from_me(&me)),
                    businesses: Some(me.businesses),
                    loading: false,
                    error: None,
                }),
                Err(e) => {
                    tracing::error!("profile fetch failed: {e}");
                    profile.set(ProfileState {
                        error: Some(e),
                        ..Default::default()
                    });
                }
            }
        });
    });

    Auth { session, profile }
}

/// Complete a provider-hosted Google sign-in when the page was loaded from
/// the provider redirect (`#provider_token=` in the fragment). Mounted by
/// the login and register screens.
pub fn use_google_completion(mut error: Signal<Option<String>>) {
    let mut session = session::use_session();
    let nav = use_navigator();
    use_future(move || async move {
        let Some(provider_token) = identity_client::take_provider_token() else {
            return;
        };
        match IdentityClient::from_env()
            .sign_in_with_google(&provider_token, &identity_client::page_url())
            .await
        {
            Ok(tokens) => {
                session::establish_session(&mut session, tokens);
                nav.replace(Route::Home {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });
}
