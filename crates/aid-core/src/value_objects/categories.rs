//! Category tags stored as text columns

text_enum! {
    /// Kind of donor record
    pub enum DonorType ("Donor type must be Individual or Life Member") {
        Individual => "Individual",
        LifeMember => "Life Member",
    }
}

text_enum! {
    pub enum Gender ("Gender must be Male, Female, or Other") {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

text_enum! {
    /// Kind of donated medical item
    pub enum MedicalCategory ("Category must be Medicine, Supplement, or Equipment") {
        Medicine => "Medicine",
        Supplement => "Supplement",
        Equipment => "Equipment",
    }
}

text_enum! {
    /// Kind of aid handed to a client
    pub enum AssistanceType ("Assistance type must be money, medicine, or equipment") {
        Money => "money",
        Medicine => "medicine",
        Equipment => "equipment",
    }
}

impl MedicalCategory {
    /// Medicines and supplements carry a strength; equipment never does
    #[inline]
    pub fn requires_strength(self) -> bool {
        !matches!(self, Self::Equipment)
    }

    /// Equipment has no strength or expiry date
    #[inline]
    pub fn is_equipment(self) -> bool {
        matches!(self, Self::Equipment)
    }
}

impl AssistanceType {
    /// Money is measured by amount; goods by quantity
    #[inline]
    pub fn is_money(self) -> bool {
        matches!(self, Self::Money)
    }
}
