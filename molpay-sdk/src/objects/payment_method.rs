use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Regional MolPay online-banking flavours, each listed by the backend under
/// its own payment method type.
#[serde(rename_all = "lowercase")]
pub enum MolpayVariant {
    Thailand,
    Malaysia,
    Vietnam,
}

impl MolpayVariant {
    pub const ALL: [MolpayVariant; 3] = [
        MolpayVariant::Thailand,
        MolpayVariant::Malaysia,
        MolpayVariant::Vietnam,
    ];

    /// The payment method type string used in payment method listings.
    pub fn payment_method_type(&self) -> &'static str {
        match self {
            MolpayVariant::Thailand => "molpay_ebanking_TH",
            MolpayVariant::Malaysia => "molpay_ebanking_fpx_MY",
            MolpayVariant::Vietnam => "molpay_ebanking_VN",
        }
    }

    pub fn from_payment_method_type(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.payment_method_type() == value)
    }
}

impl std::fmt::Display for MolpayVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.payment_method_type())
    }
}
