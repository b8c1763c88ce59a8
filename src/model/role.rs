/// Role ids carried in access tokens.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    Admin = 1,
    Hr = 2,
    Employee = 3,
    System = 4,
    ApiUser = 5,
}

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Hr),
            3 => Some(Role::Employee),
            4 => Some(Role::System),
            5 => Some(Role::ApiUser),
            _ => None,
        }
    }

    /// May read timekeeping of employees other than their own
    pub fn reads_all_timekeeping(self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for role in [
            Role::Admin,
            Role::Hr,
            Role::Employee,
            Role::System,
            Role::ApiUser,
        ] {
            assert_eq!(Role::from_id(role as u8), Some(role));
        }
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(6), None);
    }

    #[test]
    fn only_hr_and_admin_read_everyone() {
        assert!(Role::Admin.reads_all_timekeeping());
        assert!(Role::Hr.reads_all_timekeeping());
        assert!(!Role::Employee.reads_all_timekeeping());
        assert!(!Role::ApiUser.reads_all_timekeeping());
    }
}
