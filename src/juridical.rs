use crate::config::YearPivot;
use crate::error::CitizenIdError;
use crate::{CitizenId, CitizenType};
use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

// Positions within the 12 digits of a BIN:
// YYMM T D NNNNN C
const YEAR_RANGE: (usize, usize) = (0, 2);
const MONTH_RANGE: (usize, usize) = (2, 4);
const ORGANIZATION_INDEX: usize = 4;
const DEPARTMENT_INDEX: usize = 5;
const ORDER_NUMBER_RANGE: (usize, usize) = (6, 11);

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrganizationType {
    Resident,
    NonResident,
    JointEntrepreneur,
}

impl OrganizationType {
    pub fn code(&self) -> char {
        match self {
            OrganizationType::Resident => '4',
            OrganizationType::NonResident => '5',
            OrganizationType::JointEntrepreneur => '6',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '4' => Some(OrganizationType::Resident),
            '5' => Some(OrganizationType::NonResident),
            '6' => Some(OrganizationType::JointEntrepreneur),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DepartmentType {
    Head,
    Branch,
    Agency,
    FarmHolding,
}

impl DepartmentType {
    pub fn code(&self) -> char {
        match self {
            DepartmentType::Head => '0',
            DepartmentType::Branch => '1',
            DepartmentType::Agency => '2',
            DepartmentType::FarmHolding => '3',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(DepartmentType::Head),
            '1' => Some(DepartmentType::Branch),
            '2' => Some(DepartmentType::Agency),
            '3' => Some(DepartmentType::FarmHolding),
            _ => None,
        }
    }
}

/// Information about a juridical subject encoded in its citizen id (BIN).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JuridicalDataInformation<'a> {
    citizen_id: &'a CitizenId,
    year_pivot: YearPivot,
}

impl<'a> JuridicalDataInformation<'a> {
    pub fn new(citizen_id: &'a CitizenId) -> Result<Self, CitizenIdError> {
        Self::with_year_pivot(citizen_id, YearPivot::default())
    }

    pub fn with_year_pivot(
        citizen_id: &'a CitizenId,
        year_pivot: YearPivot,
    ) -> Result<Self, CitizenIdError> {
        if !citizen_id.is_juridical() {
            return Err(CitizenIdError::WrongSubjectKind {
                expected: CitizenType::Juridical,
                actual: citizen_id.citizen_type(),
            });
        }
        Ok(Self {
            citizen_id,
            year_pivot,
        })
    }

    pub fn citizen_id(&self) -> &CitizenId {
        self.citizen_id
    }

    fn two_digits(&self, (start, end): (usize, usize)) -> u32 {
        self.citizen_id
            .slice(start, end)
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    /// Year of registration or re-registration.
    pub fn year(&self) -> i32 {
        self.year_pivot.expand(self.two_digits(YEAR_RANGE) as u8)
    }

    /// Zero based month of registration (0 is January, 11 is December).
    ///
    /// Out of range month digits roll over like a lenient calendar: "00" is December
    /// and "13" is January.
    pub fn month(&self) -> u32 {
        (self.two_digits(MONTH_RANGE) + 11) % 12
    }

    pub fn registration_month(&self) -> Month {
        MONTHS[self.month() as usize]
    }

    /// First day of the registration month, if the month digits name a real month.
    pub fn registration_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.two_digits(MONTH_RANGE), 1)
    }

    pub fn organization_type(&self) -> Option<OrganizationType> {
        OrganizationType::from_code(self.citizen_id.char_at(ORGANIZATION_INDEX))
    }

    pub fn department_type(&self) -> Option<DepartmentType> {
        DepartmentType::from_code(self.citizen_id.char_at(DEPARTMENT_INDEX))
    }

    fn is_organization(&self, organization_type: OrganizationType) -> bool {
        self.citizen_id.char_at(ORGANIZATION_INDEX) == organization_type.code()
    }

    fn is_department(&self, department_type: DepartmentType) -> bool {
        self.citizen_id.char_at(DEPARTMENT_INDEX) == department_type.code()
    }

    pub fn is_resident(&self) -> bool {
        self.is_organization(OrganizationType::Resident)
    }

    pub fn is_non_resident(&self) -> bool {
        self.is_organization(OrganizationType::NonResident)
    }

    pub fn is_joint_entrepreneur(&self) -> bool {
        self.is_organization(OrganizationType::JointEntrepreneur)
    }

    pub fn is_head(&self) -> bool {
        self.is_department(DepartmentType::Head)
    }

    pub fn is_branch(&self) -> bool {
        self.is_department(DepartmentType::Branch)
    }

    pub fn is_agency(&self) -> bool {
        self.is_department(DepartmentType::Agency)
    }

    pub fn is_farm_holding(&self) -> bool {
        self.is_department(DepartmentType::FarmHolding)
    }

    /// Registration order number, leading zeros included.
    pub fn order_number(&self) -> &'a str {
        let (start, end) = ORDER_NUMBER_RANGE;
        self.citizen_id.slice(start, end)
    }
}

impl<'a> TryFrom<Option<&'a CitizenId>> for JuridicalDataInformation<'a> {
    type Error = CitizenIdError;

    fn try_from(citizen_id: Option<&'a CitizenId>) -> Result<Self, Self::Error> {
        Self::new(citizen_id.ok_or(CitizenIdError::NullIdentifier)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(value: &str) -> CitizenId {
        CitizenId::new(value).unwrap()
    }

    #[test]
    fn should_return_the_year() {
        let citizen_id = id("081140000436");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert_eq!(information.year(), 2008);

        let citizen_id = id("980141004945");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert_eq!(information.year(), 1998);
    }

    #[test]
    fn should_use_configured_year_pivot() {
        let citizen_id = id("980141004945");
        let information = JuridicalDataInformation::with_year_pivot(
            &citizen_id,
            YearPivot::FixedCentury { start: 2000 },
        )
        .unwrap();
        assert_eq!(information.year(), 2098);
    }

    #[test]
    fn should_return_the_month() {
        let citizen_id = id("081140000436");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert_eq!(information.month(), 10);
        assert_eq!(information.registration_month(), Month::November);
        assert_eq!(
            information.registration_date(),
            NaiveDate::from_ymd_opt(2008, 11, 1)
        );
    }

    #[test]
    fn should_map_every_month() {
        for (index, month) in MONTHS.iter().enumerate() {
            let value = format!("08{:02}40000436", index + 1);
            let citizen_id = id(&value);
            let information = JuridicalDataInformation::new(&citizen_id).unwrap();
            assert_eq!(information.month(), index as u32, "input {value}");
            assert_eq!(information.registration_month(), *month);
            assert_eq!(information.registration_month().number_from_month(), index as u32 + 1);
        }
    }

    #[test]
    fn should_roll_over_out_of_range_months() {
        let cases = vec![
            ("080040000436", 11, Month::December),
            ("081340000436", 0, Month::January),
            ("089940000436", 2, Month::March),
        ];
        for (value, month, registration_month) in cases {
            let citizen_id = id(value);
            let information = JuridicalDataInformation::new(&citizen_id).unwrap();
            assert_eq!(information.month(), month, "input {value}");
            assert_eq!(information.registration_month(), registration_month);
            assert_eq!(information.registration_date(), None);
        }
    }

    #[test]
    fn should_return_true_if_resident() {
        let citizen_id = id("081140000436");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert!(information.is_resident());
        assert!(!information.is_non_resident());
        assert!(!information.is_joint_entrepreneur());
        assert_eq!(
            information.organization_type(),
            Some(OrganizationType::Resident)
        );
    }

    #[test]
    fn should_return_true_if_non_resident() {
        let citizen_id = id("070850004167");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert!(!information.is_resident());
        assert!(information.is_non_resident());
        assert!(!information.is_joint_entrepreneur());
    }

    #[test]
    fn should_return_true_if_joint_entrepreneur() {
        let citizen_id = id("081160000436");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert!(!information.is_resident());
        assert!(!information.is_non_resident());
        assert!(information.is_joint_entrepreneur());
    }

    #[test]
    fn should_return_none_for_unmapped_organization() {
        let citizen_id = id("081170000436");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert_eq!(information.organization_type(), None);
        assert!(!information.is_resident());
        assert!(!information.is_non_resident());
        assert!(!information.is_joint_entrepreneur());
    }

    #[test]
    fn should_decode_department() {
        let cases = vec![
            ("081140000436", DepartmentType::Head),
            ("980141004945", DepartmentType::Branch),
            ("120142005544", DepartmentType::Agency),
            ("081143000436", DepartmentType::FarmHolding),
        ];
        for (value, department) in cases {
            let citizen_id = id(value);
            let information = JuridicalDataInformation::new(&citizen_id).unwrap();
            assert_eq!(information.department_type(), Some(department));
            assert_eq!(information.is_head(), department == DepartmentType::Head);
            assert_eq!(information.is_branch(), department == DepartmentType::Branch);
            assert_eq!(information.is_agency(), department == DepartmentType::Agency);
            assert_eq!(
                information.is_farm_holding(),
                department == DepartmentType::FarmHolding
            );
        }

        let citizen_id = id("081149000436");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert_eq!(information.department_type(), None);
    }

    #[test]
    fn should_return_order_number() {
        let citizen_id = id("081140000436");
        let information = JuridicalDataInformation::new(&citizen_id).unwrap();
        assert_eq!(information.order_number(), "00043");
    }

    #[test]
    fn should_reject_physical_subject() {
        let citizen_id = id("880319350220");
        assert_eq!(
            JuridicalDataInformation::new(&citizen_id),
            Err(CitizenIdError::WrongSubjectKind {
                expected: CitizenType::Juridical,
                actual: CitizenType::Physical,
            })
        );
    }

    #[test]
    fn should_require_citizen_id() {
        assert_eq!(
            JuridicalDataInformation::try_from(None::<&CitizenId>),
            Err(CitizenIdError::NullIdentifier)
        );
    }

    #[test]
    fn codes_should_round_trip() {
        for organization in [
            OrganizationType::Resident,
            OrganizationType::NonResident,
            OrganizationType::JointEntrepreneur,
        ] {
            assert_eq!(
                OrganizationType::from_code(organization.code()),
                Some(organization)
            );
        }
        assert_eq!(OrganizationType::NonResident.to_string(), "non_resident");
        assert_eq!(DepartmentType::FarmHolding.to_string(), "farm_holding");
    }
}
