//! Static records loaded at startup.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::employee::{Employee, EmploymentStatus};
use super::equipment::{Condition, EquipmentItem, EquipmentStatus};
use super::expense::{Expense, ExpenseStatus};
use super::payroll::{Deductions, PayPeriod, PaymentMethod, PayrollRecord, PayrollStatus};
use super::task::{Priority, Task, TaskStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub fn expenses() -> Vec<Expense> {
    let row = |id: u32,
               description: &str,
               amount: Decimal,
               day: u32,
               category: &str,
               vendor: &str,
               status: ExpenseStatus| Expense {
        id,
        description: description.to_string(),
        amount,
        date: date(2024, 7, day),
        category: category.to_string(),
        vendor: vendor.to_string(),
        receipt_number: format!("RCP-{id:03}"),
        status,
    };

    vec![
        row(
            1,
            "Office Supplies - Pens, Paper, Folders",
            dec!(245.50),
            23,
            "Office Supplies",
            "Office Depot",
            ExpenseStatus::Approved,
        ),
        row(
            2,
            "Construction Materials - Cement, Steel Bars",
            dec!(1250.00),
            22,
            "Construction",
            "BuildMart",
            ExpenseStatus::Pending,
        ),
        row(
            3,
            "Safety Equipment - Hard Hats, Safety Vests",
            dec!(380.75),
            21,
            "Safety",
            "SafetyFirst Co.",
            ExpenseStatus::Approved,
        ),
        row(
            4,
            "Tools - Drill Bits, Screwdrivers, Hammers",
            dec!(567.25),
            20,
            "Tools",
            "ToolWorld",
            ExpenseStatus::Approved,
        ),
        row(
            5,
            "Vehicle Maintenance - Oil Change, Tire Rotation",
            dec!(125.00),
            19,
            "Vehicle",
            "AutoCare Plus",
            ExpenseStatus::Approved,
        ),
        row(
            6,
            "Electrical Supplies - Wires, Switches, Outlets",
            dec!(445.80),
            18,
            "Electrical",
            "ElectroSupply",
            ExpenseStatus::Rejected,
        ),
    ]
}

struct Stock<'a> {
    total: u32,
    available: u32,
    borrowed: u32,
    status: EquipmentStatus,
    borrower: Option<(&'a str, u32)>,
}

impl<'a> Stock<'a> {
    fn shelf(total: u32) -> Self {
        Self {
            total,
            available: total,
            borrowed: 0,
            status: EquipmentStatus::Available,
            borrower: None,
        }
    }

    /// `borrowed` units out with `who` since July `day`, due back a week later.
    fn lent(total: u32, borrowed: u32, who: &'a str, day: u32) -> Self {
        Self {
            total,
            available: total - borrowed,
            borrowed,
            status: EquipmentStatus::Borrowed,
            borrower: Some((who, day)),
        }
    }
}

pub fn equipment() -> Vec<EquipmentItem> {
    let item = |id: &str,
                name: &str,
                category: &str,
                make_type: &str,
                capacity: &str,
                location: &str,
                condition: Condition,
                stock: Stock<'_>| EquipmentItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        make_type: make_type.to_string(),
        capacity: capacity.to_string(),
        location: location.to_string(),
        total_quantity: stock.total,
        available_quantity: stock.available,
        borrowed_quantity: stock.borrowed,
        status: stock.status,
        condition,
        borrowed_by: stock.borrower.map(|(who, _)| who.to_string()),
        borrow_date: stock.borrower.map(|(_, day)| date(2024, 7, day)),
        expected_return: stock.borrower.map(|(_, day)| date(2024, 7, day + 7)),
    };

    vec![
        item(
            "EQ001",
            "Screwdriver Set",
            "Hand Tools",
            "Stanley FatMax Pro",
            "6-piece set, 25 Nm torque",
            "Tool Storage Room A",
            Condition::Good,
            Stock::lent(5, 1, "John Doe", 22),
        ),
        item(
            "EQ002",
            "Electric Drill",
            "Power Tools",
            "DeWalt DCD771C2",
            "20V Max, 1/2\" Chuck, 300 UWO",
            "Workshop Section B",
            Condition::Excellent,
            Stock::lent(3, 1, "Kevin White", 23),
        ),
        item(
            "EQ003",
            "Safety Helmet",
            "Safety",
            "MSA V-Gard",
            "Class E, 20,000V protection",
            "Safety Equipment Locker",
            Condition::Good,
            Stock::shelf(10),
        ),
        item(
            "EQ004",
            "Measuring Tape",
            "Measuring",
            "Stanley PowerLock",
            "25ft length, 1\" blade width",
            "Tool Storage Room A",
            Condition::Good,
            Stock::lent(8, 2, "Mike Johnson", 21),
        ),
        // Counts deliberately left as recorded: one unit unaccounted for.
        item(
            "EQ005",
            "Circular Saw",
            "Power Tools",
            "Makita 5007MG",
            "7-1/4\" blade, 15 Amp motor",
            "Workshop Section C",
            Condition::Fair,
            Stock {
                total: 2,
                available: 1,
                borrowed: 0,
                status: EquipmentStatus::Maintenance,
                borrower: None,
            },
        ),
        item(
            "EQ006",
            "Hammer Set",
            "Hand Tools",
            "Estwing E3-16C",
            "16oz claw, Steel handle",
            "Tool Storage Room B",
            Condition::Good,
            Stock::shelf(6),
        ),
        item(
            "EQ007",
            "Angle Grinder",
            "Power Tools",
            "Bosch GWS13-50VSP",
            "5\" disc, 13 Amp, 11,500 RPM",
            "Workshop Section A",
            Condition::Excellent,
            Stock::lent(4, 1, "David Brown", 24),
        ),
        item(
            "EQ008",
            "Level Set",
            "Measuring",
            "Klein Tools 935RBLT",
            "48\" aluminum, 3 vials",
            "Tool Storage Room A",
            Condition::Good,
            Stock::shelf(5),
        ),
        item(
            "EQ009",
            "Impact Wrench",
            "Power Tools",
            "Milwaukee 2767-20",
            "1/2\" drive, 1000 ft-lbs torque",
            "Workshop Section B",
            Condition::Excellent,
            Stock::shelf(3),
        ),
        item(
            "EQ010",
            "Safety Goggles",
            "Safety",
            "3M SecureFit SF400",
            "Anti-fog, UV protection",
            "Safety Equipment Locker",
            Condition::Good,
            Stock::shelf(15),
        ),
        item(
            "EQ011",
            "Welding Machine",
            "Power Tools",
            "Lincoln Electric Power MIG 210",
            "208V, 210A output, MIG/Flux",
            "Welding Station",
            Condition::Excellent,
            Stock::shelf(2),
        ),
        item(
            "EQ012",
            "Extension Ladder",
            "Access",
            "Werner D6228-2",
            "28ft extension, 250 lbs capacity",
            "Equipment Yard",
            Condition::Good,
            Stock::shelf(4),
        ),
    ]
}

pub fn tasks() -> Vec<Task> {
    struct Slot {
        day: u32,
        start: (u32, u32),
        end: (u32, u32),
    }

    #[allow(clippy::too_many_arguments)]
    fn task(
        id: u32,
        name: &str,
        description: &str,
        members: &[&str],
        slot: Slot,
        location: &str,
        status: TaskStatus,
        priority: Priority,
        progress: u8,
        category: &str,
        hours: (Decimal, Decimal),
    ) -> Task {
        Task {
            id,
            name: name.to_string(),
            description: description.to_string(),
            assigned_members: members.iter().map(|m| m.to_string()).collect(),
            date: date(2024, 7, slot.day),
            start_time: time(slot.start.0, slot.start.1),
            end_time: time(slot.end.0, slot.end.1),
            location: location.to_string(),
            status,
            priority,
            progress,
            category: category.to_string(),
            estimated_hours: hours.0,
            actual_hours: hours.1,
        }
    }

    vec![
        task(
            1,
            "General Cleaning for Today",
            "Complete cleaning of all office areas including restrooms and common areas",
            &["John Doe", "Jane Smith"],
            Slot { day: 24, start: (8, 0), end: (12, 0) },
            "Office Building - All Floors",
            TaskStatus::InProgress,
            Priority::High,
            65,
            "Maintenance",
            (dec!(4), dec!(2.6)),
        ),
        task(
            2,
            "Equipment Maintenance Check",
            "Monthly inspection and maintenance of all power tools and equipment",
            &["Mike Johnson", "Sarah Wilson"],
            Slot { day: 24, start: (13, 0), end: (17, 0) },
            "Tool Room A & B",
            TaskStatus::Pending,
            Priority::Medium,
            0,
            "Maintenance",
            (dec!(4), dec!(0)),
        ),
        task(
            3,
            "Safety Training Session",
            "Quarterly safety training for all construction workers",
            &["David Brown", "Lisa Garcia", "Tom Anderson"],
            Slot { day: 25, start: (9, 0), end: (11, 0) },
            "Conference Room A",
            TaskStatus::Scheduled,
            Priority::High,
            0,
            "Training",
            (dec!(2), dec!(0)),
        ),
        task(
            4,
            "Inventory Count",
            "Monthly inventory count of all tools and supplies",
            &["Anna Martinez", "Chris Lee"],
            Slot { day: 23, start: (14, 0), end: (18, 0) },
            "Warehouse",
            TaskStatus::Completed,
            Priority::Medium,
            100,
            "Inventory",
            (dec!(4), dec!(3.5)),
        ),
        task(
            5,
            "Site Inspection",
            "Weekly site inspection for safety compliance and progress review",
            &["Robert Taylor", "Emily Davis"],
            Slot { day: 26, start: (10, 0), end: (14, 0) },
            "Construction Site A",
            TaskStatus::Scheduled,
            Priority::High,
            0,
            "Inspection",
            (dec!(4), dec!(0)),
        ),
        task(
            6,
            "Equipment Repair",
            "Repair broken drill and replace worn parts",
            &["Kevin White"],
            Slot { day: 24, start: (15, 0), end: (16, 30) },
            "Repair Shop",
            TaskStatus::Overdue,
            Priority::High,
            25,
            "Repair",
            (dec!(1.5), dec!(0.5)),
        ),
    ]
}

pub fn payroll() -> Vec<PayrollRecord> {
    let first_half = PayPeriod {
        start: date(2024, 7, 1),
        end: date(2024, 7, 15),
    };
    let second_half = PayPeriod {
        start: date(2024, 7, 16),
        end: date(2024, 7, 31),
    };

    struct Pay {
        hours: Decimal,
        overtime: Decimal,
        rate: Decimal,
        overtime_rate: Decimal,
        gross: Decimal,
        deductions: [Decimal; 3],
        net: Decimal,
    }

    let record = |id: u32,
                  (name, position, department): (&str, &str, &str),
                  pay_period: PayPeriod,
                  pay: Pay,
                  payment_date: NaiveDate,
                  payment_method: PaymentMethod,
                  status: PayrollStatus| PayrollRecord {
        id,
        employee_id: format!("EMP{id:03}"),
        name: name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        pay_period,
        hours_worked: pay.hours,
        overtime_hours: pay.overtime,
        hourly_rate: pay.rate,
        overtime_rate: pay.overtime_rate,
        gross_pay: pay.gross,
        deductions: Deductions {
            tax: pay.deductions[0],
            insurance: pay.deductions[1],
            retirement: pay.deductions[2],
        },
        net_pay: pay.net,
        payment_date,
        payment_method,
        status,
    };

    vec![
        record(
            1,
            ("John Doe", "Construction Worker", "Construction"),
            first_half,
            Pay {
                hours: dec!(80),
                overtime: dec!(8),
                rate: dec!(25.00),
                overtime_rate: dec!(37.50),
                gross: dec!(2300.00),
                deductions: [dec!(345.00), dec!(150.00), dec!(115.00)],
                net: dec!(1690.00),
            },
            date(2024, 7, 16),
            PaymentMethod::DirectDeposit,
            PayrollStatus::Paid,
        ),
        record(
            2,
            ("Jane Smith", "Site Supervisor", "Management"),
            first_half,
            Pay {
                hours: dec!(80),
                overtime: dec!(12),
                rate: dec!(35.00),
                overtime_rate: dec!(52.50),
                gross: dec!(3430.00),
                deductions: [dec!(514.50), dec!(200.00), dec!(171.50)],
                net: dec!(2544.00),
            },
            date(2024, 7, 16),
            PaymentMethod::DirectDeposit,
            PayrollStatus::Paid,
        ),
        record(
            3,
            ("Mike Johnson", "Equipment Operator", "Operations"),
            first_half,
            Pay {
                hours: dec!(75),
                overtime: dec!(5),
                rate: dec!(28.00),
                overtime_rate: dec!(42.00),
                gross: dec!(2310.00),
                deductions: [dec!(346.50), dec!(175.00), dec!(115.50)],
                net: dec!(1673.00),
            },
            date(2024, 7, 16),
            PaymentMethod::Check,
            PayrollStatus::Paid,
        ),
        record(
            4,
            ("Sarah Wilson", "Safety Inspector", "Safety"),
            second_half,
            Pay {
                hours: dec!(78),
                overtime: dec!(6),
                rate: dec!(32.00),
                overtime_rate: dec!(48.00),
                gross: dec!(2784.00),
                deductions: [dec!(417.60), dec!(180.00), dec!(139.20)],
                net: dec!(2047.20),
            },
            date(2024, 8, 1),
            PaymentMethod::DirectDeposit,
            PayrollStatus::Processing,
        ),
        record(
            5,
            ("David Brown", "Maintenance Worker", "Maintenance"),
            second_half,
            Pay {
                hours: dec!(80),
                overtime: dec!(10),
                rate: dec!(24.00),
                overtime_rate: dec!(36.00),
                gross: dec!(2280.00),
                deductions: [dec!(342.00), dec!(160.00), dec!(114.00)],
                net: dec!(1664.00),
            },
            date(2024, 8, 1),
            PaymentMethod::DirectDeposit,
            PayrollStatus::Pending,
        ),
        record(
            6,
            ("Lisa Garcia", "Administrative Assistant", "Administration"),
            second_half,
            Pay {
                hours: dec!(80),
                overtime: dec!(0),
                rate: dec!(22.00),
                overtime_rate: dec!(33.00),
                gross: dec!(1760.00),
                deductions: [dec!(264.00), dec!(140.00), dec!(88.00)],
                net: dec!(1268.00),
            },
            date(2024, 8, 1),
            PaymentMethod::DirectDeposit,
            PayrollStatus::Pending,
        ),
    ]
}

pub fn employees() -> Vec<Employee> {
    let row = |id: &str,
               name: &str,
               age: u8,
               phone: &str,
               address: &str,
               (position, department): (&str, &str),
               year_started: u16,
               status: EmploymentStatus| Employee {
        id: id.to_string(),
        name: name.to_string(),
        age,
        phone: phone.to_string(),
        address: address.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        year_started,
        status,
    };

    vec![
        row(
            "EMP001",
            "John Doe",
            32,
            "+1 (555) 123-4567",
            "123 Main St, New York, NY 10001",
            ("Construction Worker", "Construction"),
            2020,
            EmploymentStatus::Regular,
        ),
        row(
            "EMP002",
            "Jane Smith",
            28,
            "+1 (555) 234-5678",
            "456 Oak Ave, Los Angeles, CA 90210",
            ("Site Supervisor", "Management"),
            2019,
            EmploymentStatus::Regular,
        ),
        row(
            "EMP003",
            "Mike Johnson",
            35,
            "+1 (555) 345-6789",
            "789 Pine Rd, Chicago, IL 60601",
            ("Equipment Operator", "Operations"),
            2021,
            EmploymentStatus::Regular,
        ),
        row(
            "EMP004",
            "Sarah Wilson",
            29,
            "+1 (555) 456-7890",
            "321 Elm St, Houston, TX 77001",
            ("Safety Inspector", "Safety"),
            2022,
            EmploymentStatus::Regular,
        ),
        row(
            "EMP005",
            "David Brown",
            26,
            "+1 (555) 567-8901",
            "654 Maple Dr, Phoenix, AZ 85001",
            ("Maintenance Worker", "Maintenance"),
            2023,
            EmploymentStatus::UnderProbation,
        ),
        row(
            "EMP006",
            "Lisa Garcia",
            31,
            "+1 (555) 678-9012",
            "987 Cedar Ln, Philadelphia, PA 19101",
            ("Administrative Assistant", "Administration"),
            2018,
            EmploymentStatus::Regular,
        ),
        row(
            "EMP007",
            "Tom Anderson",
            24,
            "+1 (555) 789-0123",
            "147 Birch St, San Antonio, TX 78201",
            ("Junior Engineer", "Engineering"),
            2024,
            EmploymentStatus::UnderProbation,
        ),
        row(
            "EMP008",
            "Emily Davis",
            33,
            "+1 (555) 890-1234",
            "258 Spruce Ave, San Diego, CA 92101",
            ("Project Manager", "Management"),
            2017,
            EmploymentStatus::Regular,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(expenses().len(), 6);
        assert_eq!(equipment().len(), 12);
        assert_eq!(tasks().len(), 6);
        assert_eq!(payroll().len(), 6);
        assert_eq!(employees().len(), 8);
    }

    #[test]
    fn test_seed_dates_are_real() {
        assert!(expenses().iter().all(|e| e.date != NaiveDate::default()));
        let tasks = tasks();
        assert_eq!(tasks[5].time_range(), "15:00 - 16:30");
    }

    #[test]
    fn test_only_circular_saw_is_inconsistent() {
        let odd: Vec<String> = equipment()
            .into_iter()
            .filter(|item| !item.quantities_consistent())
            .map(|item| item.id)
            .collect();
        assert_eq!(odd, vec!["EQ005"]);
    }
}
