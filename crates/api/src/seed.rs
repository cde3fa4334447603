//! Demo dataset used by the `society-seed` binary.
//!
//! Every row goes through the repositories, so the seeded data obeys the
//! same column defaults and constraints as data created over HTTP.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use society_core::household::{FamilyMember, Pet, Vehicle};
use society_core::poll::PollOption;
use society_core::roles::{ROLE_MAINTENANCE, ROLE_MANAGEMENT, ROLE_RESIDENT, ROLE_SECURITY};
use society_core::staff::AttendanceEntry;
use society_core::types::DbId;
use society_db::models::bill::CreateBill;
use society_db::models::document::CreateDocument;
use society_db::models::emergency::CreateEmergencyContact;
use society_db::models::facility::{CreateBooking, CreateFacility, UpdateBooking};
use society_db::models::notice::CreateNotice;
use society_db::models::parking::CreateParkingSlot;
use society_db::models::staff::CreateStaff;
use society_db::models::ticket::{CreateTicket, UpdateTicket};
use society_db::models::unit::CreateUnit;
use society_db::models::user::CreateUser;
use society_db::models::vendor::CreateVendor;
use society_db::models::visitor::CheckInVisitor;
use society_db::repositories::poll_repo::NewPoll;
use society_db::repositories::{
    BillRepo, BookingRepo, DocumentRepo, EmergencyRepo, FacilityRepo, NoticeRepo, ParkingRepo,
    PollRepo, StaffRepo, TicketRepo, UnitRepo, UserRepo, VendorRepo, VisitorRepo,
};
use society_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "pass123";

/// Tables cleared by [`truncate_all`], children first.
const TABLES: &[&str] = &[
    "facility_bookings",
    "facilities",
    "tickets",
    "bills",
    "visitors",
    "parking_slots",
    "notices",
    "polls",
    "documents",
    "staff",
    "vendors",
    "emergency_contacts",
    "units",
    "users",
];

/// Row counts inserted by [`seed_demo_data`].
#[derive(Debug, Default)]
pub struct SeedReport {
    pub users: usize,
    pub units: usize,
    pub tickets: usize,
    pub bills: usize,
    pub other: usize,
}

/// Remove every row from every table and reset id sequences.
pub async fn truncate_all(pool: &DbPool) -> Result<(), sqlx::Error> {
    let sql = format!("TRUNCATE {} RESTART IDENTITY CASCADE", TABLES.join(", "));
    sqlx::query(&sql).execute(pool).await?;
    tracing::warn!(tables = TABLES.len(), "All tables truncated");
    Ok(())
}

fn date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::InternalError(format!("Bad seed date '{value}': {e}")))
}

fn time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| AppError::InternalError(format!("Bad seed time '{value}': {e}")))
}

fn instant(value: &str) -> AppResult<DateTime<Utc>> {
    value
        .parse()
        .map_err(|e| AppError::InternalError(format!("Bad seed timestamp '{value}': {e}")))
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Insert the full demo dataset.
pub async fn seed_demo_data(pool: &DbPool) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();
    let today = Utc::now().date_naive();

    /* ----------------------------------------------------------------------
    Users
    ---------------------------------------------------------------------- */
    let password_hash = hash_password(DEMO_PASSWORD)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let people = [
        ("John Smith", "resident@apt.com", ROLE_RESIDENT, "A-101", "+1234567890"),
        ("Sarah Johnson", "admin@apt.com", ROLE_MANAGEMENT, "Office", "+1234567891"),
        ("Mike Brown", "security@apt.com", ROLE_SECURITY, "Gate-1", "+1234567892"),
        ("Tom Wilson", "maintenance@apt.com", ROLE_MAINTENANCE, "Service", "+1234567893"),
        ("Jane Doe", "jane@apt.com", ROLE_RESIDENT, "B-202", "+1234567894"),
    ];
    let mut user_ids: Vec<DbId> = Vec::with_capacity(people.len());
    for (name, email, role, unit_number, phone) in people {
        let user = UserRepo::create(
            pool,
            &CreateUser {
                name: name.into(),
                email: email.into(),
                password_hash: password_hash.clone(),
                role: role.into(),
                unit_number: text(unit_number),
                phone: text(phone),
            },
        )
        .await?;
        user_ids.push(user.id);
    }
    report.users = user_ids.len();
    let (resident1, admin, maintenance, resident2) =
        (user_ids[0], user_ids[1], user_ids[3], user_ids[4]);

    /* ----------------------------------------------------------------------
    Units
    ---------------------------------------------------------------------- */
    let unit_a = UnitRepo::create(
        pool,
        &CreateUnit {
            number: "A-101".into(),
            block: "A".into(),
            floor: 1,
            unit_type: "3BHK".into(),
            owner_id: Some(resident1),
            tenant_id: None,
            family_members: vec![
                FamilyMember {
                    name: "Mary Smith".into(),
                    relation: "Spouse".into(),
                    phone: text("+1234567895"),
                },
                FamilyMember {
                    name: "Tommy Smith".into(),
                    relation: "Son".into(),
                    phone: None,
                },
            ],
            pets: vec![Pet {
                name: "Max".into(),
                pet_type: "Dog".into(),
                breed: text("Golden Retriever"),
            }],
            vehicles: vec![Vehicle {
                vehicle_type: "car".into(),
                make: text("Toyota"),
                model: text("Camry"),
                number: "ABC-1234".into(),
                parking_slot: text("P-A101"),
            }],
        },
    )
    .await?;
    let unit_b = UnitRepo::create(
        pool,
        &CreateUnit {
            number: "B-202".into(),
            block: "B".into(),
            floor: 2,
            unit_type: "2BHK".into(),
            owner_id: Some(resident2),
            tenant_id: None,
            family_members: vec![FamilyMember {
                name: "Bob Doe".into(),
                relation: "Spouse".into(),
                phone: None,
            }],
            pets: Vec::new(),
            vehicles: vec![Vehicle {
                vehicle_type: "bike".into(),
                make: text("Honda"),
                model: text("CBR"),
                number: "XYZ-5678".into(),
                parking_slot: text("P-B202"),
            }],
        },
    )
    .await?;
    report.units = 2;

    /* ----------------------------------------------------------------------
    Tickets
    ---------------------------------------------------------------------- */
    let tickets = [
        (unit_a.id, resident1, "plumbing", "Leaking faucet",
         "Kitchen faucet is leaking continuously", "medium", "open", None, None),
        (unit_a.id, resident1, "electrical", "Faulty switch",
         "Bedroom light switch not working", "low", "in-progress", Some(maintenance), None),
        (unit_b.id, resident2, "elevator", "Elevator stuck",
         "Block B elevator stuck on 3rd floor", "urgent", "resolved", Some(maintenance),
         text("Fixed quickly, thank you!")),
    ];
    for (unit_id, creator, category, subject, description, priority, status, assignee, feedback) in
        tickets
    {
        let ticket = TicketRepo::create(
            pool,
            creator,
            &CreateTicket {
                unit_id: Some(unit_id),
                category: category.into(),
                subject: subject.into(),
                description: description.into(),
                priority: priority.into(),
            },
        )
        .await?;
        TicketRepo::update(
            pool,
            ticket.id,
            &ticket.status,
            &UpdateTicket {
                assigned_to_id: assignee,
                status: Some(status.into()),
                feedback,
                ..Default::default()
            },
        )
        .await?;
        report.tickets += 1;
    }

    /* ----------------------------------------------------------------------
    Bills
    ---------------------------------------------------------------------- */
    let bills = [
        (unit_a.id, "maintenance", 5000.0, "2025-01-15", "pending", None, "Monthly Maintenance", "January 2025"),
        (unit_a.id, "water", 500.0, "2025-01-15", "pending", None, "Water Charges", "January 2025"),
        (unit_a.id, "maintenance", 5000.0, "2024-12-15", "paid", Some("2024-12-10"), "Monthly Maintenance", "December 2024"),
        (unit_b.id, "maintenance", 4000.0, "2025-01-15", "overdue", None, "Monthly Maintenance", "January 2025"),
    ];
    for (unit_id, bill_type, amount, due, status, paid, description, month) in bills {
        // Only consulted for the paid bill.
        let paid_on = paid.map(date).transpose()?.unwrap_or(today);
        BillRepo::create(
            pool,
            &CreateBill {
                unit_id: Some(unit_id),
                bill_type: bill_type.into(),
                amount,
                due_date: date(due)?,
                status: text(status),
                description: description.into(),
                month: month.into(),
            },
            paid_on,
        )
        .await?;
        report.bills += 1;
    }

    /* ----------------------------------------------------------------------
    Staff
    ---------------------------------------------------------------------- */
    let staff = [
        ("Rajesh Kumar", "Security Guard", "+1234567820", "Day (6AM-6PM)",
         vec![("2025-01-12", "present"), ("2025-01-11", "present")]),
        ("Suresh Patel", "Security Guard", "+1234567821", "Night (6PM-6AM)",
         vec![("2025-01-12", "present"), ("2025-01-11", "absent")]),
        ("Maya Singh", "Housekeeping", "+1234567822", "Day (8AM-5PM)",
         vec![("2025-01-12", "present")]),
        ("Ram Sharma", "Maintenance", "+1234567823", "Day (9AM-6PM)",
         vec![("2025-01-12", "leave")]),
    ];
    for (name, role, phone, shift, marks) in staff {
        let attendance = marks
            .into_iter()
            .map(|(day, status)| {
                Ok(AttendanceEntry {
                    date: date(day)?,
                    status: status.into(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;
        StaffRepo::create(
            pool,
            &CreateStaff {
                name: name.into(),
                role: role.into(),
                phone: phone.into(),
                shift: shift.into(),
                attendance,
            },
        )
        .await?;
        report.other += 1;
    }

    /* ----------------------------------------------------------------------
    Notices
    ---------------------------------------------------------------------- */
    NoticeRepo::create(
        pool,
        admin,
        &CreateNotice {
            title: "Water Supply Interruption".into(),
            content: "Water supply will be interrupted on Jan 15th from 10 AM to 2 PM for tank cleaning.".into(),
            notice_type: "notice".into(),
            event_date: None,
            attachment: None,
            important: true,
        },
    )
    .await?;
    NoticeRepo::create(
        pool,
        admin,
        &CreateNotice {
            title: "Republic Day Celebration".into(),
            content: "Join us for Republic Day celebrations on Jan 26th at the clubhouse. Flag hoisting at 8 AM followed by cultural programs.".into(),
            notice_type: "event".into(),
            event_date: Some(date("2025-01-26")?),
            attachment: None,
            important: false,
        },
    )
    .await?;
    report.other += 2;

    /* ----------------------------------------------------------------------
    Facilities and bookings
    ---------------------------------------------------------------------- */
    FacilityRepo::create(
        pool,
        &CreateFacility {
            name: "Gymnasium".into(),
            description: "Fully equipped modern gym".into(),
            capacity: 20,
            timings: "5:00 AM - 10:00 PM".into(),
            amenities: vec!["Treadmills".into(), "Weights".into()],
            rules: vec!["Proper attire required".into()],
            is_paid: false,
            price_per_hour: None,
            image: None,
        },
    )
    .await?;
    let hall = FacilityRepo::create(
        pool,
        &CreateFacility {
            name: "Party Hall".into(),
            description: "Spacious party hall".into(),
            capacity: 100,
            timings: "9:00 AM - 11:00 PM".into(),
            amenities: vec!["AC".into(), "Sound System".into()],
            rules: vec!["Clean after use".into()],
            is_paid: true,
            price_per_hour: Some(1000.0),
            image: None,
        },
    )
    .await?;

    let booking_request = CreateBooking {
        facility_id: hall.id,
        unit_id: Some(unit_a.id),
        date: date("2025-01-20")?,
        start_time: time("18:00")?,
        end_time: time("22:00")?,
        purpose: text("Birthday Party"),
    };
    let booking = BookingRepo::create(pool, resident1, &booking_request, |_| -> AppResult<()> {
        Ok(())
    })
    .await?
    .ok_or_else(|| AppError::InternalError("Seeded facility vanished".into()))?;
    let approve = UpdateBooking {
        status: text("approved"),
        ..Default::default()
    };
    BookingRepo::update(pool, booking.id, &approve, |_, _| -> AppResult<()> { Ok(()) }).await?;
    report.other += 3;

    /* ----------------------------------------------------------------------
    Visitors
    ---------------------------------------------------------------------- */
    VisitorRepo::check_in(
        pool,
        &CheckInVisitor {
            unit_id: Some(unit_a.id),
            name: "Robert Johnson".into(),
            phone: "+1234567899".into(),
            purpose: "Family Visit".into(),
            vehicle_number: None,
            pre_approved: true,
            visitor_type: "visitor".into(),
        },
        instant("2025-01-12T10:30:00Z")?,
    )
    .await?;
    let delivery = VisitorRepo::check_in(
        pool,
        &CheckInVisitor {
            unit_id: Some(unit_a.id),
            name: "Amazon Delivery".into(),
            phone: "+1234567800".into(),
            purpose: "Package Delivery".into(),
            vehicle_number: None,
            pre_approved: false,
            visitor_type: "delivery".into(),
        },
        instant("2025-01-12T11:00:00Z")?,
    )
    .await?;
    VisitorRepo::check_out(pool, delivery.id, instant("2025-01-12T11:15:00Z")?).await?;
    report.other += 2;

    /* ----------------------------------------------------------------------
    Poll
    ---------------------------------------------------------------------- */
    let option = |text: &str, votes| PollOption {
        text: text.into(),
        votes,
    };
    PollRepo::create(
        pool,
        &NewPoll {
            created_by_id: admin,
            question: "Should we extend gym timings to 11 PM?".into(),
            options: vec![option("Yes", 45), option("No", 15), option("Indifferent", 10)],
            ends_at: date("2025-01-20")?,
            is_anonymous: true,
            voted_by: vec![resident1],
        },
    )
    .await?;
    report.other += 1;

    /* ----------------------------------------------------------------------
    Vendors
    ---------------------------------------------------------------------- */
    let vendors = [
        ("QuickFix Plumbing", "Plumbing", "+1234567810", Some("quickfix@email.com"), 4.5, Some("2025-06-30")),
        ("PowerElec Solutions", "Electrical", "+1234567811", None, 4.2, None),
        ("CleanSweep Services", "Housekeeping", "+1234567812", None, 4.8, Some("2025-12-31")),
    ];
    for (name, category, phone, email, rating, contract_end) in vendors {
        VendorRepo::create(
            pool,
            &CreateVendor {
                name: name.into(),
                category: category.into(),
                phone: phone.into(),
                email: email.map(String::from),
                address: None,
                rating: Some(rating),
                contract_end: contract_end.map(date).transpose()?,
            },
        )
        .await?;
        report.other += 1;
    }

    /* ----------------------------------------------------------------------
    Documents
    ---------------------------------------------------------------------- */
    for (title, category) in [
        ("Society Bylaws", "rules"),
        ("AGM Minutes - Dec 2024", "minutes"),
        ("Annual Budget 2025", "budget"),
    ] {
        DocumentRepo::create(
            pool,
            admin,
            &CreateDocument {
                title: title.into(),
                category: category.into(),
                file_type: "pdf".into(),
                file_url: None,
            },
        )
        .await?;
        report.other += 1;
    }

    /* ----------------------------------------------------------------------
    Parking slots
    ---------------------------------------------------------------------- */
    let slots = [
        ("P-A101", "resident", Some(unit_a.id), Some("ABC-1234")),
        ("P-B202", "resident", Some(unit_b.id), Some("XYZ-5678")),
        ("V-01", "visitor", None, None),
        ("V-02", "visitor", None, None),
    ];
    for (slot_number, slot_type, assigned_to, vehicle_number) in slots {
        ParkingRepo::create(
            pool,
            &CreateParkingSlot {
                slot_number: slot_number.into(),
                slot_type: slot_type.into(),
                assigned_to,
                vehicle_number: vehicle_number.map(String::from),
            },
        )
        .await?;
        report.other += 1;
    }

    /* ----------------------------------------------------------------------
    Emergency contacts
    ---------------------------------------------------------------------- */
    let contacts = [
        ("Police", "Emergency", "100", true),
        ("Ambulance", "Medical", "102", true),
        ("Fire Station", "Emergency", "101", true),
        ("Society Security", "Internal", "+1234567892", true),
        ("Management Office", "Internal", "+1234567891", false),
    ];
    for (name, contact_type, phone, available_24x7) in contacts {
        EmergencyRepo::create(
            pool,
            &CreateEmergencyContact {
                name: name.into(),
                contact_type: contact_type.into(),
                phone: phone.into(),
                available_24x7,
            },
        )
        .await?;
        report.other += 1;
    }

    tracing::info!(
        users = report.users,
        units = report.units,
        tickets = report.tickets,
        bills = report.bills,
        other = report.other,
        "Demo data seeded"
    );
    Ok(report)
}
