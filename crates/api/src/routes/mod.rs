pub mod auth;
pub mod bills;
pub mod docs;
pub mod documents;
pub mod emergency;
pub mod facilities;
pub mod health;
pub mod notices;
pub mod parking;
pub mod polls;
pub mod tickets;
pub mod units;
pub mod users;
pub mod vendors;
pub mod visitors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                 login (public)
/// /auth/me                                    current profile
///
/// /users                                      list, create (management)
/// /users/{id}                                 get, update, delete (management)
/// /users/staff                                create (management)
/// /users/staff/all                            list
/// /users/staff/{id}                           update, delete (management)
/// /users/staff/{id}/attendance                record attendance (management)
///
/// /units                                      list, create
/// /units/{id}                                 get, update, delete
/// /units/{id}/family                          add family member
/// /units/{id}/family/{index}                  update, remove family member
/// /units/{id}/vehicles                        add vehicle
/// /units/{id}/vehicles/{index}                update, remove vehicle
/// /units/{id}/pets                            add pet
/// /units/{id}/pets/{index}                    remove pet
///
/// /tickets                                    list (filterable), create
/// /tickets/my                                 tickets raised by the caller
/// /tickets/{id}                               get, update
///
/// /bills                                      list (filterable), create
/// /bills/my                                   bills of the caller's units
/// /bills/summary                              totals per status
/// /bills/{id}                                 update, delete
/// /bills/{id}/pay                             mark paid
///
/// /visitors                                   list (?active=true)
/// /visitors/checkin                           check in
/// /visitors/{id}                              update, delete
/// /visitors/{id}/checkout                     check out
///
/// /facilities                                 list, create
/// /facilities/{id}                            update, delete
/// /facilities/bookings                        list, create
/// /facilities/bookings/{id}                   update, delete (management)
///
/// /notices                                    list, create
/// /notices/{id}                               update, delete
///
/// /polls                                      list, create
/// /polls/{id}                                 update, delete
/// /polls/{id}/vote                            vote
///
/// /vendors                                    list, create
/// /vendors/{id}                               get, update, delete
///
/// /documents                                  list, create
/// /documents/{id}                             delete
///
/// /parking                                    list (?type=), create
/// /parking/{id}                               update
///
/// /emergency                                  list, create
/// /emergency/{id}                             update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/units", units::router())
        .nest("/tickets", tickets::router())
        .nest("/bills", bills::router())
        .nest("/visitors", visitors::router())
        .nest("/facilities", facilities::router())
        .nest("/notices", notices::router())
        .nest("/polls", polls::router())
        .nest("/vendors", vendors::router())
        .nest("/documents", documents::router())
        .nest("/parking", parking::router())
        .nest("/emergency", emergency::router())
}
