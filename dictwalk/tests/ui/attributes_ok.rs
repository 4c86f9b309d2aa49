use dictwalk::{AttrMap, Attributes};

#[derive(Attributes)]
#[attributes(name, tax_id = "business_tax_id",)]
struct Applicant(AttrMap);

#[derive(Attributes)]
#[attributes(city)]
struct Address {
    inner: AttrMap,
}

fn main() {
    let mut applicant = Applicant::from(AttrMap::default());
    let _ = applicant.set_name("Bob");
    let _ = applicant.name();
    let _ = applicant.tax_id();

    let address = Address::from(AttrMap::default());
    let _ = address.city();
    let _: &AttrMap = address.as_ref();
    let _ = &address.inner;
}
