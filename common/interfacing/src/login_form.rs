use crate::imports::*;

/// Body of `POST /admin`.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub password: Option<SecretString>,
}

impl LoginForm {
    pub fn matches(&self, expected: &SecretString) -> bool {
        self.password
            .as_ref()
            .is_some_and(|password| password.expose_secret() == expected.expose_secret())
    }
}

impl Serialize for LoginForm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("LoginForm", 1)?;
        s.serialize_field(
            "password",
            &self.password.as_ref().map(|password| password.expose_secret()),
        )?;
        s.end()
    }
}
