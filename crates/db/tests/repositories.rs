//! Integration tests for the repository layer.
//!
//! Exercises repositories against a real database:
//! - Create, update, list and delete round trips
//! - Joined summaries on detail queries
//! - Unique and foreign key constraints
//! - Locked read-modify-write operations (household, votes, bookings)

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use society_core::error::CoreError;
use society_core::facility::ensure_slot_free;
use society_core::household::{add_entry, remove_entry, FamilyMember};
use society_core::poll::{build_options, cast_vote};
use society_core::staff::{record_attendance, AttendanceEntry};
use society_db::models::bill::{BillFilter, CreateBill, UpdateBill};
use society_db::models::emergency::{CreateEmergencyContact, UpdateEmergencyContact};
use society_db::models::facility::{CreateBooking, CreateFacility, UpdateBooking};
use society_db::models::parking::{CreateParkingSlot, ParkingFilter};
use society_db::models::staff::CreateStaff;
use society_db::models::ticket::{CreateTicket, TicketFilter, UpdateTicket};
use society_db::models::unit::{CreateUnit, UpdateUnit};
use society_db::models::user::{CreateUser, UpdateUser};
use society_db::models::visitor::{CheckInVisitor, VisitorFilter};
use society_db::repositories::poll_repo::{NewPoll, PollChanges};
use society_db::repositories::{
    BillRepo, BookingRepo, EmergencyRepo, FacilityRepo, ParkingRepo, PollRepo, StaffRepo,
    TicketRepo, UnitRepo, UserRepo, VisitorRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Error type for closures that mix domain and database failures.
#[derive(Debug)]
enum TestError {
    Db(sqlx::Error),
    Core(CoreError),
}

impl From<sqlx::Error> for TestError {
    fn from(e: sqlx::Error) -> Self {
        Self::Db(e)
    }
}

impl From<CoreError> for TestError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

fn new_user(name: &str, email: &str, role: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        role: role.to_string(),
        unit_number: None,
        phone: Some("9876543210".to_string()),
    }
}

fn new_unit(number: &str, owner_id: Option<i64>) -> CreateUnit {
    CreateUnit {
        number: number.to_string(),
        block: "A".to_string(),
        floor: 1,
        unit_type: "2BHK".to_string(),
        owner_id,
        tenant_id: None,
        family_members: Vec::new(),
        pets: Vec::new(),
        vehicles: Vec::new(),
    }
}

fn new_bill(unit_id: i64, amount: f64) -> CreateBill {
    CreateBill {
        unit_id: Some(unit_id),
        bill_type: "maintenance".to_string(),
        amount,
        due_date: date(2025, 1, 10),
        status: None,
        description: "Monthly maintenance".to_string(),
        month: "January 2025".to_string(),
    }
}

fn new_facility(name: &str) -> CreateFacility {
    CreateFacility {
        name: name.to_string(),
        description: "Rooftop hall".to_string(),
        capacity: 100,
        timings: "9 AM - 10 PM".to_string(),
        amenities: vec!["AC".to_string()],
        rules: Vec::new(),
        is_paid: true,
        price_per_hour: Some(500.0),
        image: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Users and units
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_crud(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Asha", "asha@example.com", "resident"))
        .await
        .unwrap();
    assert_eq!(user.role, "resident");

    let found = UserRepo::find_by_email(&pool, "asha@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);

    let update = UpdateUser {
        unit_number: Some("A-101".to_string()),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.unit_number.as_deref(), Some("A-101"));
    assert_eq!(updated.name, "Asha");

    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
    assert!(UserRepo::delete(&pool, user.id).await.unwrap());
    assert!(!UserRepo::delete(&pool, user.id).await.unwrap());
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("A", "dup@example.com", "resident"))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &new_user("B", "dup@example.com", "resident"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, "uq_users_email"), "got {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unit_detail_includes_owner_summary(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("Owner", "owner@example.com", "resident"))
        .await
        .unwrap();
    let unit = UnitRepo::create(&pool, &new_unit("A-101", Some(owner.id)))
        .await
        .unwrap();

    let detail = UnitRepo::find_detail(&pool, unit.id).await.unwrap().unwrap();
    let summary = detail.owner.expect("owner summary").0;
    assert_eq!(summary.id, owner.id);
    assert_eq!(summary.name, "Owner");
    assert!(detail.tenant.is_none());

    let update = UpdateUnit {
        floor: Some(3),
        ..Default::default()
    };
    let updated = UnitRepo::update(&pool, unit.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.floor, 3);
    assert_eq!(updated.owner_id, Some(owner.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_owner_clears_unit_reference(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("Owner", "owner@example.com", "resident"))
        .await
        .unwrap();
    let unit = UnitRepo::create(&pool, &new_unit("A-101", Some(owner.id)))
        .await
        .unwrap();

    UserRepo::delete(&pool, owner.id).await.unwrap();

    let unit = UnitRepo::find_by_id(&pool, unit.id).await.unwrap().unwrap();
    assert_eq!(unit.owner_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_household_edit_is_stored(pool: PgPool) {
    let unit = UnitRepo::create(&pool, &new_unit("B-202", None)).await.unwrap();

    let updated = UnitRepo::modify_household(&pool, unit.id, |u| {
        add_entry(
            &mut u.family_members.0,
            FamilyMember {
                name: "Ravi".to_string(),
                relation: "Son".to_string(),
                phone: None,
            },
        )
        .map_err(TestError::from)
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.family_members.0.len(), 1);

    let result = UnitRepo::modify_household(&pool, unit.id, |u| {
        remove_entry(&mut u.family_members.0, 5)
            .map(|_| ())
            .map_err(TestError::from)
    })
    .await;
    assert_matches!(result, Err(TestError::Core(CoreError::MissingEntry("Family member"))));

    let stored = UnitRepo::find_by_id(&pool, unit.id).await.unwrap().unwrap();
    assert_eq!(stored.family_members.0[0].name, "Ravi");

    let missing = UnitRepo::modify_household(&pool, 999_999, |_| Ok::<_, TestError>(()))
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ticket_filters_and_detail(pool: PgPool) {
    let resident = UserRepo::create(&pool, &new_user("Res", "res@example.com", "resident"))
        .await
        .unwrap();
    let tech = UserRepo::create(&pool, &new_user("Tech", "tech@example.com", "maintenance"))
        .await
        .unwrap();
    let unit = UnitRepo::create(&pool, &new_unit("A-101", Some(resident.id)))
        .await
        .unwrap();

    let input = CreateTicket {
        unit_id: Some(unit.id),
        category: "plumbing".to_string(),
        subject: "Leaking tap".to_string(),
        description: "Kitchen tap drips".to_string(),
        priority: "medium".to_string(),
    };
    let ticket = TicketRepo::create(&pool, resident.id, &input).await.unwrap();
    assert_eq!(ticket.status, "open");

    let assign = UpdateTicket {
        assigned_to_id: Some(tech.id),
        status: Some("in-progress".to_string()),
        ..Default::default()
    };
    TicketRepo::update(&pool, ticket.id, "open", &assign).await.unwrap().unwrap();

    // A writer that read the ticket while it was still open loses.
    let stale = UpdateTicket {
        status: Some("open".to_string()),
        ..Default::default()
    };
    assert!(TicketRepo::update(&pool, ticket.id, "open", &stale).await.unwrap().is_none());
    assert!(TicketRepo::update(&pool, 9999, "open", &stale).await.unwrap().is_none());

    let by_tech = TicketRepo::list(
        &pool,
        &TicketFilter {
            assigned_to_id: Some(tech.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_tech.len(), 1);
    let detail = &by_tech[0];
    assert_eq!(detail.unit.as_ref().unwrap().0.number, "A-101");
    assert_eq!(detail.assigned_to.as_ref().unwrap().0.name, "Tech");
    assert_eq!(detail.created_by.as_ref().unwrap().0.id, resident.id);

    let open = TicketRepo::list(
        &pool,
        &TicketFilter {
            status: Some("open".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(open.is_empty());

    let mine = TicketRepo::list_by_creator(&pool, resident.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert!(TicketRepo::list_by_creator(&pool, tech.id).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Bills
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bill_can_only_be_paid_once(pool: PgPool) {
    let unit = UnitRepo::create(&pool, &new_unit("A-101", None)).await.unwrap();
    let bill = BillRepo::create(&pool, &new_bill(unit.id, 2500.0), date(2025, 1, 1))
        .await
        .unwrap();
    assert_eq!(bill.status, "pending");

    let paid = BillRepo::mark_paid(&pool, bill.id, date(2025, 1, 5))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(paid.status, "paid");
    assert_eq!(paid.paid_date, Some(date(2025, 1, 5)));

    let again = BillRepo::mark_paid(&pool, bill.id, date(2025, 1, 6)).await.unwrap();
    assert!(again.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bill_paid_date_follows_status(pool: PgPool) {
    let unit = UnitRepo::create(&pool, &new_unit("A-101", None)).await.unwrap();
    let today = date(2025, 2, 1);

    let mut settled = new_bill(unit.id, 900.0);
    settled.status = Some("paid".to_string());
    let settled = BillRepo::create(&pool, &settled, today).await.unwrap();
    assert_eq!(settled.paid_date, Some(today));

    let open = BillRepo::create(&pool, &new_bill(unit.id, 400.0), today).await.unwrap();
    assert_eq!(open.paid_date, None);

    let to_paid = UpdateBill {
        status: Some("paid".to_string()),
        ..Default::default()
    };
    let paid = BillRepo::update(&pool, open.id, &to_paid, today)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(paid.paid_date, Some(today));

    // An existing payment date survives unrelated edits.
    let relabel = UpdateBill {
        description: Some("Corrected".to_string()),
        ..Default::default()
    };
    let relabelled = BillRepo::update(&pool, open.id, &relabel, date(2025, 3, 1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(relabelled.paid_date, Some(today));

    let reopen = UpdateBill {
        status: Some("pending".to_string()),
        paid_date: Some(today),
        ..Default::default()
    };
    let reopened = BillRepo::update(&pool, open.id, &reopen, today)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reopened.status, "pending");
    assert_eq!(reopened.paid_date, None);

    let paid_again = BillRepo::mark_paid(&pool, open.id, date(2025, 2, 3))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(paid_again.paid_date, Some(date(2025, 2, 3)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bill_totals_and_occupant_listing(pool: PgPool) {
    let tenant = UserRepo::create(&pool, &new_user("Tenant", "tenant@example.com", "resident"))
        .await
        .unwrap();
    let mut rented = new_unit("A-101", None);
    rented.tenant_id = Some(tenant.id);
    let rented = UnitRepo::create(&pool, &rented).await.unwrap();
    let other = UnitRepo::create(&pool, &new_unit("A-102", None)).await.unwrap();

    let issued = date(2025, 1, 1);
    let first = BillRepo::create(&pool, &new_bill(rented.id, 1000.0), issued).await.unwrap();
    BillRepo::create(&pool, &new_bill(rented.id, 500.0), issued).await.unwrap();
    BillRepo::create(&pool, &new_bill(other.id, 300.0), issued).await.unwrap();
    BillRepo::mark_paid(&pool, first.id, date(2025, 1, 2)).await.unwrap();

    let totals = BillRepo::totals_by_status(&pool).await.unwrap();
    let pending = totals.iter().find(|t| t.status == "pending").unwrap();
    assert_eq!(pending.count, 2);
    assert!((pending.amount - 800.0).abs() < f64::EPSILON);

    let mine = BillRepo::list_for_occupant(&pool, tenant.id).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|b| b.bill.unit_id == Some(rented.id)));

    let paid_only = BillRepo::list(
        &pool,
        &BillFilter {
            status: Some("paid".to_string()),
            unit_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(paid_only.len(), 1);
}

// ---------------------------------------------------------------------------
// Visitors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_visitor_checkout_once(pool: PgPool) {
    let input = CheckInVisitor {
        unit_id: None,
        name: "Courier".to_string(),
        phone: "9000000000".to_string(),
        purpose: "Parcel".to_string(),
        vehicle_number: None,
        pre_approved: false,
        visitor_type: "delivery".to_string(),
    };
    let visitor = VisitorRepo::check_in(&pool, &input, Utc::now()).await.unwrap();

    let active = VisitorRepo::list(&pool, &VisitorFilter { active: true }).await.unwrap();
    assert_eq!(active.len(), 1);

    let out = VisitorRepo::check_out(&pool, visitor.id, Utc::now()).await.unwrap();
    assert!(out.unwrap().check_out_time.is_some());
    assert!(VisitorRepo::check_out(&pool, visitor.id, Utc::now())
        .await
        .unwrap()
        .is_none());

    let active = VisitorRepo::list(&pool, &VisitorFilter { active: true }).await.unwrap();
    assert!(active.is_empty());
    let all = VisitorRepo::list(&pool, &VisitorFilter::default()).await.unwrap();
    assert_eq!(all.len(), 1);
}

// ---------------------------------------------------------------------------
// Facilities and bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_overlap_checked_against_active_slots(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Res", "res@example.com", "resident"))
        .await
        .unwrap();
    let facility = FacilityRepo::create(&pool, &new_facility("Clubhouse")).await.unwrap();

    let booking = |start: u32, end: u32| CreateBooking {
        facility_id: facility.id,
        unit_id: None,
        date: date(2025, 2, 1),
        start_time: time(start),
        end_time: time(end),
        purpose: None,
    };
    let check = |input: &CreateBooking| {
        let (start, end) = (input.start_time, input.end_time);
        move |slots: &[(NaiveTime, NaiveTime)]| -> Result<(), TestError> {
            ensure_slot_free(start, end, slots.iter().copied())?;
            Ok(())
        }
    };

    let first_input = booking(18, 22);
    let first = BookingRepo::create(&pool, user.id, &first_input, check(&first_input))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.status, "pending");

    let clash = booking(20, 23);
    let result = BookingRepo::create(&pool, user.id, &clash, check(&clash)).await;
    assert_matches!(result, Err(TestError::Core(CoreError::Conflict(_))));

    let adjacent = booking(22, 23);
    assert!(BookingRepo::create(&pool, user.id, &adjacent, check(&adjacent))
        .await
        .unwrap()
        .is_some());

    // Cancelling frees the slot; the pending 22:00-23:00 booking still holds.
    let cancel = UpdateBooking {
        status: Some("cancelled".to_string()),
        ..Default::default()
    };
    BookingRepo::update(&pool, first.id, &cancel, |_, _| Ok::<_, TestError>(()))
        .await
        .unwrap()
        .unwrap();
    let result = BookingRepo::create(&pool, user.id, &clash, check(&clash)).await;
    assert_matches!(result, Err(TestError::Core(CoreError::Conflict(_))));

    let freed = booking(19, 21);
    assert!(BookingRepo::create(&pool, user.id, &freed, check(&freed))
        .await
        .unwrap()
        .is_some());

    let listed = BookingRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].facility.0.name, "Clubhouse");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_for_missing_facility(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Res", "res@example.com", "resident"))
        .await
        .unwrap();
    let input = CreateBooking {
        facility_id: 424_242,
        unit_id: None,
        date: date(2025, 2, 1),
        start_time: time(10),
        end_time: time(11),
        purpose: None,
    };
    let result = BookingRepo::create(&pool, user.id, &input, |_| Ok::<_, TestError>(()))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_facility_cascades_bookings(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Res", "res@example.com", "resident"))
        .await
        .unwrap();
    let facility = FacilityRepo::create(&pool, &new_facility("Gym")).await.unwrap();
    let input = CreateBooking {
        facility_id: facility.id,
        unit_id: None,
        date: date(2025, 2, 1),
        start_time: time(6),
        end_time: time(7),
        purpose: Some("Workout".to_string()),
    };
    let booking = BookingRepo::create(&pool, user.id, &input, |_| Ok::<_, TestError>(()))
        .await
        .unwrap()
        .unwrap();

    assert!(FacilityRepo::delete(&pool, facility.id).await.unwrap());
    assert!(BookingRepo::find_by_id(&pool, booking.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Polls
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_poll_vote_recorded_once(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Res", "res@example.com", "resident"))
        .await
        .unwrap();
    let options = build_options(&["Yes".to_string(), "No".to_string()]).unwrap();
    let poll = PollRepo::create(
        &pool,
        &NewPoll {
            created_by_id: user.id,
            question: "Install solar panels?".to_string(),
            options,
            ends_at: date(2099, 12, 31),
            is_anonymous: false,
            voted_by: Vec::new(),
        },
    )
    .await
    .unwrap();

    let today = date(2025, 1, 1);
    let vote = |p: &mut society_db::models::poll::Poll| -> Result<(), TestError> {
        cast_vote(&mut p.options.0, &mut p.voted_by, user.id, 0, p.ends_at, today)?;
        Ok(())
    };

    let updated = PollRepo::record_vote(&pool, poll.id, vote).await.unwrap().unwrap();
    assert_eq!(updated.options.0[0].votes, 1);
    assert_eq!(updated.voted_by, vec![user.id]);

    let again = PollRepo::record_vote(&pool, poll.id, vote).await;
    assert_matches!(again, Err(TestError::Core(CoreError::Validation(msg))) if msg == "Already voted");

    let stored = PollRepo::find_by_id(&pool, poll.id).await.unwrap().unwrap();
    assert_eq!(stored.options.0[0].votes, 1);

    let listed = PollRepo::list(&pool).await.unwrap();
    assert_eq!(listed[0].created_by.as_ref().unwrap().0.id, user.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_poll_options_kept_once_voted(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Res", "res@example.com", "resident"))
        .await
        .unwrap();
    let poll = PollRepo::create(
        &pool,
        &NewPoll {
            created_by_id: user.id,
            question: "Repaint the lobby?".to_string(),
            options: build_options(&["Blue".to_string(), "Green".to_string()]).unwrap(),
            ends_at: date(2099, 12, 31),
            is_anonymous: false,
            voted_by: Vec::new(),
        },
    )
    .await
    .unwrap();

    let rename = PollChanges {
        options: Some(build_options(&["Blue".to_string(), "White".to_string()]).unwrap()),
        ..Default::default()
    };
    let renamed = PollRepo::update(&pool, poll.id, &rename).await.unwrap().unwrap();
    assert_eq!(renamed.options.0[1].text, "White");

    PollRepo::record_vote(&pool, poll.id, |p| -> Result<(), TestError> {
        cast_vote(&mut p.options.0, &mut p.voted_by, user.id, 1, p.ends_at, date(2025, 1, 1))?;
        Ok(())
    })
    .await
    .unwrap()
    .unwrap();

    let replace = PollChanges {
        options: Some(build_options(&["Red".to_string(), "Grey".to_string()]).unwrap()),
        ..Default::default()
    };
    assert!(PollRepo::update(&pool, poll.id, &replace).await.unwrap().is_none());

    let stored = PollRepo::find_by_id(&pool, poll.id).await.unwrap().unwrap();
    assert_eq!(stored.options.0[1].text, "White");
    assert_eq!(stored.options.0[1].votes, 1);
    assert_eq!(stored.voted_by, vec![user.id]);

    let reword = PollChanges {
        question: Some("Repaint the lobby this year?".to_string()),
        ..Default::default()
    };
    let reworded = PollRepo::update(&pool, poll.id, &reword).await.unwrap().unwrap();
    assert_eq!(reworded.question, "Repaint the lobby this year?");
    assert_eq!(reworded.options.0[1].votes, 1);
}

// ---------------------------------------------------------------------------
// Staff and parking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_attendance_replaces_same_day(pool: PgPool) {
    let staff = StaffRepo::create(
        &pool,
        &CreateStaff {
            name: "Ramesh".to_string(),
            role: "Security Guard".to_string(),
            phone: "9111111111".to_string(),
            shift: "Night".to_string(),
            attendance: Vec::new(),
        },
    )
    .await
    .unwrap();

    for status in ["present", "leave"] {
        StaffRepo::modify_attendance(&pool, staff.id, |s| {
            record_attendance(
                &mut s.attendance.0,
                AttendanceEntry {
                    date: date(2025, 1, 15),
                    status: status.to_string(),
                },
            )
            .map_err(TestError::from)
        })
        .await
        .unwrap()
        .unwrap();
    }

    let stored = StaffRepo::find_by_id(&pool, staff.id).await.unwrap().unwrap();
    assert_eq!(stored.attendance.0.len(), 1);
    assert_eq!(stored.attendance.0[0].status, "leave");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parking_slot_unique_and_filtered(pool: PgPool) {
    let slot = |number: &str, slot_type: &str| CreateParkingSlot {
        slot_number: number.to_string(),
        slot_type: slot_type.to_string(),
        assigned_to: None,
        vehicle_number: None,
    };
    ParkingRepo::create(&pool, &slot("P-01", "resident")).await.unwrap();
    ParkingRepo::create(&pool, &slot("V-01", "visitor")).await.unwrap();

    let err = ParkingRepo::create(&pool, &slot("P-01", "visitor"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, "uq_parking_slots_slot_number"));

    let visitor_slots = ParkingRepo::list(
        &pool,
        &ParkingFilter {
            slot_type: Some("visitor".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(visitor_slots.len(), 1);
    assert_eq!(visitor_slots[0].slot_number, "V-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_emergency_contacts_grouped_by_type(pool: PgPool) {
    let contact = |name: &str, contact_type: &str| CreateEmergencyContact {
        name: name.to_string(),
        contact_type: contact_type.to_string(),
        phone: "100".to_string(),
        available_24x7: true,
    };
    let police = EmergencyRepo::create(&pool, &contact("City Police", "police"))
        .await
        .unwrap();
    EmergencyRepo::create(&pool, &contact("Fire Station", "fire"))
        .await
        .unwrap();

    let listed = EmergencyRepo::list(&pool).await.unwrap();
    assert_eq!(listed[0].contact_type, "fire");
    assert_eq!(listed[1].name, "City Police");

    let update = UpdateEmergencyContact {
        available_24x7: Some(false),
        ..Default::default()
    };
    let updated = EmergencyRepo::update(&pool, police.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert!(!updated.available_24x7);
    assert_eq!(updated.phone, "100");

    assert!(EmergencyRepo::delete(&pool, police.id).await.unwrap());
    assert!(!EmergencyRepo::delete(&pool, police.id).await.unwrap());
}
