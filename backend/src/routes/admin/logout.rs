use crate::routes::imports::*;

pub async fn logout(mut session: WritableSession) -> Redirect {
    if session.is_authenticated() {
        session.sign_out();
        tracing::info!("Admin successfully logged out.");
    }

    Redirect::to(static_routes::HOME)
}
